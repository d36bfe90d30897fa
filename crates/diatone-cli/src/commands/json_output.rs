//! JSON output types for machine-readable CLI output.
//!
//! Every command prints one [`CommandOutput`] document under `--json`, so tools can parse
//! results and failures the same way.

use diatone_pitch::{
    Interval, IntervalClass, IntervalCoord, ParseError, Pitch, PitchCoord, Quality,
};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// Library errors pass their own code through (e.g. "PITCH_001").
pub mod error_codes {
    /// Transposition result outside the coordinate range
    pub const TRANSPOSE_OUT_OF_RANGE: &str = "CLI_001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "PITCH_001", "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// The offending input (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            input: None,
        }
    }

    /// Sets the offending input for this error.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

impl From<&ParseError> for JsonError {
    fn from(err: &ParseError) -> Self {
        JsonError::new(err.code(), err.to_string()).with_input(err.input.clone())
    }
}

/// JSON envelope shared by all commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// The command result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> CommandOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Everything the library knows about one pitch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PitchReport {
    /// Scientific pitch notation
    pub spn: String,
    /// Letter plus accidental
    pub name: String,
    /// Letter name
    pub letter: char,
    /// Accidental as `b`/`#` characters
    pub accidental: String,
    /// Semitones away from the natural step
    pub accidental_offset: i64,
    /// Octave number
    pub octave: i32,
    /// Letter step within the octave (0 = C)
    pub simple_diatonic: i32,
    /// Raw coordinate
    pub coord: PitchCoord,
}

impl From<&Pitch> for PitchReport {
    fn from(pitch: &Pitch) -> Self {
        Self {
            spn: pitch.spn(),
            name: pitch.name(),
            letter: pitch.letter(),
            accidental: pitch.accidental(),
            accidental_offset: pitch.accidental_offset(),
            octave: pitch.octave(),
            simple_diatonic: pitch.simple_diatonic(),
            coord: pitch.coord(),
        }
    }
}

/// Everything the library knows about one interval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntervalReport {
    /// Start pitch (SPN)
    pub start: String,
    /// End pitch (SPN)
    pub end: String,
    /// Raw coordinate (end minus start)
    pub coord: IntervalCoord,
    /// Perfect or imperfect
    pub class: IntervalClass,
    /// Deviation from the natural interval, in semitones
    pub quality_offset: i64,
    /// Quality label
    pub quality: Quality,
    /// Interval number, ignoring direction
    pub number: u64,
    /// Short name of the ascending form, e.g. "M6"
    pub name: String,
    /// Whether the interval moves downward
    pub descending: bool,
}

impl IntervalReport {
    /// Builds the report for the interval from `start` to `end`.
    pub fn new(start: &Pitch, end: &Pitch) -> Self {
        let interval = Interval::new(start, end);
        Self {
            start: start.spn(),
            end: end.spn(),
            coord: interval.coord(),
            class: interval.class(),
            quality_offset: interval.quality_offset(),
            quality: interval.quality(),
            number: interval.number(),
            name: interval.name(),
            descending: interval.is_descending(),
        }
    }
}

/// Result of the `transpose` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransposeReport {
    /// The pitch before transposition
    pub from: PitchReport,
    /// The interval applied
    pub by: IntervalCoord,
    /// The pitch after transposition
    pub to: PitchReport,
}
