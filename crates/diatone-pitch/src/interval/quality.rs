//! Interval classes and quality labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::diatonic::simplify_diatonic;

/// Whether an interval takes perfect or major/minor qualities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalClass {
    /// Unisons, fourths, fifths and their compounds.
    Perfect,
    /// Seconds, thirds, sixths, sevenths and their compounds.
    Imperfect,
}

impl IntervalClass {
    /// Classifies a diatonic span. Negative spans reduce with floor-mod.
    pub fn of(diatonic: i64) -> Self {
        match simplify_diatonic(diatonic) {
            0 | 3 | 4 => IntervalClass::Perfect,
            _ => IntervalClass::Imperfect,
        }
    }

    /// Quality for a deviation (in semitones) from the natural interval of this class.
    ///
    /// | offset | perfect     | imperfect       |
    /// |--------|-------------|-----------------|
    /// | <= -2  | d x -offset | d x (-offset-1) |
    /// | -1     | d           | m               |
    /// | 0      | P           | M               |
    /// | >= 1   | A x offset  | A x offset      |
    pub fn quality(self, offset: i64) -> Quality {
        if offset > 0 {
            return Quality::Augmented(offset.unsigned_abs());
        }

        let flat = offset.unsigned_abs();
        match (self, flat) {
            (IntervalClass::Perfect, 0) => Quality::Perfect,
            (IntervalClass::Perfect, n) => Quality::Diminished(n),
            (IntervalClass::Imperfect, 0) => Quality::Major,
            (IntervalClass::Imperfect, 1) => Quality::Minor,
            (IntervalClass::Imperfect, n) => Quality::Diminished(n - 1),
        }
    }
}

impl fmt::Display for IntervalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalClass::Perfect => write!(f, "perfect"),
            IntervalClass::Imperfect => write!(f, "imperfect"),
        }
    }
}

/// Conventional interval quality.
///
/// Serialized as its label (`"P"`, `"m"`, `"AA"`, `"ddd"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Quality {
    /// `P`
    Perfect,
    /// `M`
    Major,
    /// `m`
    Minor,
    /// `A` repeated the given number of times (at least one).
    Augmented(u64),
    /// `d` repeated the given number of times (at least one).
    Diminished(u64),
}

impl Quality {
    /// The quality label, e.g. `"M"` or `"dd"`.
    pub fn label(&self) -> String {
        match self {
            Quality::Perfect => "P".to_string(),
            Quality::Major => "M".to_string(),
            Quality::Minor => "m".to_string(),
            Quality::Augmented(n) => "A".repeat(*n as usize),
            Quality::Diminished(n) => "d".repeat(*n as usize),
        }
    }

    /// Long English name, e.g. `"doubly augmented"`.
    pub fn long_name(&self) -> String {
        match self {
            Quality::Perfect => "perfect".to_string(),
            Quality::Major => "major".to_string(),
            Quality::Minor => "minor".to_string(),
            Quality::Augmented(n) => multiplied("augmented", *n),
            Quality::Diminished(n) => multiplied("diminished", *n),
        }
    }
}

fn multiplied(base: &str, times: u64) -> String {
    match times {
        1 => base.to_string(),
        2 => format!("doubly {}", base),
        3 => format!("triply {}", base),
        n => format!("{}x {}", n, base),
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Quality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count() as u64;
        match s {
            "P" => Ok(Quality::Perfect),
            "M" => Ok(Quality::Major),
            "m" => Ok(Quality::Minor),
            _ if count > 0 && s.chars().all(|c| c == 'A') => Ok(Quality::Augmented(count)),
            _ if count > 0 && s.chars().all(|c| c == 'd') => Ok(Quality::Diminished(count)),
            _ => Err(format!(
                "Unknown quality: {}. Supported: P, M, m, A..., d...",
                s
            )),
        }
    }
}

impl From<Quality> for String {
    fn from(quality: Quality) -> Self {
        quality.label()
    }
}

impl TryFrom<String> for Quality {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
