//! Diatone Pitch Library
//!
//! This crate models Western pitches and the intervals between them with an exact,
//! accidental-aware integer representation, and derives conventional interval qualities
//! from it.
//!
//! # Overview
//!
//! Every pitch is a pair of integers:
//!
//! - **diatonic**: letter steps from C0 (C0 = 0, D0 = 1, ..., C1 = 7)
//! - **semitones**: absolute semitones from C0, including accidentals
//!
//! Keeping both counts means enharmonic spellings stay distinct (`C#4` and `Db4` share a
//! semitone count but not a diatonic count), which is exactly what interval naming needs.
//!
//! # Example
//!
//! ```
//! use diatone_pitch::{Interval, Pitch};
//!
//! let start: Pitch = "C4".parse().unwrap();
//! let end: Pitch = "F#6".parse().unwrap();
//!
//! let interval = Interval::new(&start, &end);
//! assert_eq!(interval.coord().diatonic(), 17);
//! assert_eq!(interval.coord().semitones(), 30);
//! assert_eq!(interval.quality().to_string(), "A");
//! assert_eq!(interval.name(), "A18");
//! ```
//!
//! # Modules
//!
//! - [`diatonic`]: Static diatonic/semitone conversion table and helpers
//! - [`pitch`]: Pitch coordinates, SPN parsing and rendering
//! - [`interval`]: Interval coordinates and quality classification
//! - [`error`]: Parse error type

pub mod diatonic;
pub mod error;
pub mod interval;
pub mod pitch;

// Re-export commonly used types at the crate root
pub use error::ParseError;
pub use interval::{Interval, IntervalClass, IntervalCoord, Quality, MAX_SPAN};
pub use pitch::{Pitch, PitchCoord, PitchSource, DEFAULT_OCTAVE};
