//! Pitches as (diatonic, semitones) coordinates.
//!
//! A [`Pitch`] is built from exactly one [`PitchSource`]: an explicit coordinate, a raw
//! semitone count, or a scientific pitch notation string. Once built it never changes; all
//! accessors are pure functions of the coordinate.

mod spn;


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::diatonic::{
    diatonic_octave, letter_for, natural_semitones, nearest_diatonic, simplify_diatonic,
};
use crate::error::ParseError;
use crate::interval::Interval;

pub use spn::DEFAULT_OCTAVE;

/// The coordinate of a pitch: letter steps and semitones above C0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PitchCoord {
    /// Letter steps above C0; one step per letter name, regardless of accidentals.
    pub diatonic: i32,
    /// Semitones above C0, including accidental and octave offsets.
    pub semitones: i32,
}

impl PitchCoord {
    /// Creates a coordinate from its two counts.
    pub const fn new(diatonic: i32, semitones: i32) -> Self {
        Self {
            diatonic,
            semitones,
        }
    }
}

impl From<(i32, i32)> for PitchCoord {
    fn from((diatonic, semitones): (i32, i32)) -> Self {
        Self::new(diatonic, semitones)
    }
}

/// Where a [`Pitch`] comes from.
///
/// Exactly one source is given per pitch. In JSON this is a single-key object, e.g.
/// `{"spn": "F#6"}`, `{"semitones": 61}` or `{"coord": {"diatonic": 28, "semitones": 48}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchSource {
    /// Stored verbatim.
    Coord(PitchCoord),
    /// Spelled with the nearest natural step at or below the count.
    Semitones(i32),
    /// Parsed as scientific pitch notation.
    Spn(String),
}

/// A single pitch.
///
/// Equality is coordinate equality, so enharmonic spellings (`C#4`, `Db4`) are different
/// pitches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pitch {
    coord: PitchCoord,
}

impl Pitch {
    /// Builds a pitch from its source.
    ///
    /// Only [`PitchSource::Spn`] can fail.
    pub fn new(source: PitchSource) -> Result<Self, ParseError> {
        match source {
            PitchSource::Coord(coord) => Ok(Self::from_coord(coord)),
            PitchSource::Semitones(semitones) => Ok(Self::from_semitones(semitones)),
            PitchSource::Spn(input) => Self::from_spn(&input),
        }
    }

    /// Builds a pitch from an explicit coordinate.
    pub const fn from_coord(coord: PitchCoord) -> Self {
        Self { coord }
    }

    /// Builds a pitch from a semitone count above C0.
    ///
    /// The letter is the natural step at or nearest below the count, so counts between two
    /// naturals come out sharp.
    ///
    /// # Examples
    /// ```
    /// use diatone_pitch::Pitch;
    ///
    /// assert_eq!(Pitch::from_semitones(0).spn(), "C0");
    /// assert_eq!(Pitch::from_semitones(49).spn(), "C#4");
    /// ```
    pub fn from_semitones(semitones: i32) -> Self {
        Self::from_coord(PitchCoord::new(nearest_diatonic(semitones), semitones))
    }

    /// Parses scientific pitch notation, e.g. `"F#6"`, `"dbb"`, `"Bx-1"`.
    ///
    /// The letter is case-insensitive; accidentals are `b` (-1), `#` (+1) and `x` (+2), in any
    /// number; a missing octave means octave 4. A sign without digits (`"C-"`) is an error,
    /// as is an octave too large for the coordinate range.
    ///
    /// # Examples
    /// ```
    /// use diatone_pitch::Pitch;
    ///
    /// let pitch = Pitch::from_spn("F#6").unwrap();
    /// assert_eq!(pitch.diatonic(), 45);
    /// assert_eq!(pitch.semitones(), 78);
    ///
    /// assert!(Pitch::from_spn("H4").is_err());
    /// assert!(Pitch::from_spn("C-").is_err());
    /// ```
    pub fn from_spn(input: &str) -> Result<Self, ParseError> {
        spn::parse(input).map(Self::from_coord)
    }

    /// The stored coordinate.
    pub fn coord(&self) -> PitchCoord {
        self.coord
    }

    /// Letter steps above C0.
    pub fn diatonic(&self) -> i32 {
        self.coord.diatonic
    }

    /// Semitones above C0.
    pub fn semitones(&self) -> i32 {
        self.coord.semitones
    }

    /// The letter step within the octave (0 = C ... 6 = B).
    pub fn simple_diatonic(&self) -> i32 {
        simplify_diatonic(self.diatonic().into()) as i32
    }

    /// The octave number, taken from the letter step rather than the sounding pitch
    /// (`B#3` is in octave 3).
    pub fn octave(&self) -> i32 {
        // A seventh of an i32 always fits back into one.
        diatonic_octave(self.diatonic().into()) as i32
    }

    /// The letter name.
    pub fn letter(&self) -> char {
        letter_for(self.diatonic().into())
    }

    /// Semitones away from the natural step with the same letter and octave.
    ///
    /// Wider than the coordinate itself: `(i32::MAX, 0)` is billions of flats.
    pub fn accidental_offset(&self) -> i64 {
        i64::from(self.semitones()) - natural_semitones(self.diatonic().into())
    }

    /// The accidental as `b`s or `#`s, one character per semitone of offset.
    pub fn accidental(&self) -> String {
        let offset = self.accidental_offset();
        if offset < 0 {
            "b".repeat(offset.unsigned_abs() as usize)
        } else {
            "#".repeat(offset.unsigned_abs() as usize)
        }
    }

    /// Letter plus accidental, e.g. `"Dbb"`.
    pub fn name(&self) -> String {
        format!("{}{}", self.letter(), self.accidental())
    }

    /// Scientific pitch notation, e.g. `"F#6"`.
    pub fn spn(&self) -> String {
        format!("{}{}", self.name(), self.octave())
    }

    /// Moves the pitch by an interval, keeping its spelling arithmetic exact.
    ///
    /// Returns `None` if either count of the result leaves the `i32` coordinate range.
    ///
    /// # Examples
    /// ```
    /// use diatone_pitch::{Interval, Pitch};
    ///
    /// let c4 = Pitch::from_spn("C4").unwrap();
    /// let e4 = Pitch::from_spn("E4").unwrap();
    /// let third = Interval::new(&c4, &e4);
    ///
    /// let ab3 = Pitch::from_spn("Ab3").unwrap();
    /// assert_eq!(ab3.transpose(&third).map(|p| p.spn()), Some("C4".to_string()));
    ///
    /// let octave = Interval::new(&c4, &Pitch::from_spn("C5").unwrap());
    /// let top = Pitch::from_spn("C178956970").unwrap();
    /// assert_eq!(top.transpose(&octave), None);
    /// ```
    pub fn transpose(&self, interval: &Interval) -> Option<Self> {
        let by = interval.coord();
        let diatonic = i32::try_from(i64::from(self.diatonic()) + by.diatonic()).ok()?;
        let semitones = i32::try_from(i64::from(self.semitones()) + by.semitones()).ok()?;
        Some(Self::from_coord(PitchCoord::new(diatonic, semitones)))
    }
}

impl From<PitchCoord> for Pitch {
    fn from(coord: PitchCoord) -> Self {
        Self::from_coord(coord)
    }
}

impl FromStr for Pitch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_spn(s)
    }
}

impl TryFrom<PitchSource> for Pitch {
    type Error = ParseError;

    fn try_from(source: PitchSource) -> Result<Self, Self::Error> {
        Self::new(source)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spn())
    }
}
