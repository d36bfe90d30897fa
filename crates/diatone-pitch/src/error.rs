//! Error types for pitch parsing.

use thiserror::Error;

/// A string that is not valid scientific pitch notation.
///
/// This is the only failure the library reports: every other operation is a total function
/// over integer coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse invalid scientific pitch notation: {input}")]
pub struct ParseError {
    /// The rejected input, verbatim.
    pub input: String,
}

impl ParseError {
    /// Creates a parse error for the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        "PITCH_001"
    }

    /// Error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        "pitch"
    }
}
