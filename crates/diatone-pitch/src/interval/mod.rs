//! Intervals as directed (diatonic, semitones) differences between two pitches.

mod quality;


use std::fmt;
use std::ops::Neg;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::diatonic::{natural_semitones, DIATONICS_PER_OCTAVE};
use crate::pitch::Pitch;

pub use quality::{IntervalClass, Quality};

/// Largest letter or semitone distance an interval can cover: the distance between the
/// lowest and highest `i32` pitch coordinate.
pub const MAX_SPAN: i64 = u32::MAX as i64;

/// The coordinate of an interval: end minus start, componentwise.
///
/// Both counts stay within `-MAX_SPAN..=MAX_SPAN`, so every interval between two pitches is
/// representable and all derived sizes are exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct IntervalCoord {
    diatonic: i64,
    semitones: i64,
}

impl IntervalCoord {
    /// Creates a coordinate from its two differences.
    pub const fn new(diatonic: i32, semitones: i32) -> Self {
        Self {
            diatonic: diatonic as i64,
            semitones: semitones as i64,
        }
    }

    /// Creates a coordinate from wide counts, or `None` if either exceeds [`MAX_SPAN`].
    pub fn checked_new(diatonic: i64, semitones: i64) -> Option<Self> {
        let span = -MAX_SPAN..=MAX_SPAN;
        if span.contains(&diatonic) && span.contains(&semitones) {
            Some(Self {
                diatonic,
                semitones,
            })
        } else {
            None
        }
    }

    /// Letter steps from start to end.
    pub fn diatonic(&self) -> i64 {
        self.diatonic
    }

    /// Semitones from start to end.
    pub fn semitones(&self) -> i64 {
        self.semitones
    }

    /// Componentwise sum, or `None` if it exceeds [`MAX_SPAN`].
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Self::checked_new(self.diatonic + rhs.diatonic, self.semitones + rhs.semitones)
    }
}

impl From<(i32, i32)> for IntervalCoord {
    fn from((diatonic, semitones): (i32, i32)) -> Self {
        Self::new(diatonic, semitones)
    }
}

impl Neg for IntervalCoord {
    type Output = Self;

    fn neg(self) -> Self {
        // The span is symmetric, so negation stays in range.
        Self {
            diatonic: -self.diatonic,
            semitones: -self.semitones,
        }
    }
}

impl<'de> Deserialize<'de> for IntervalCoord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            diatonic: i64,
            semitones: i64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::checked_new(raw.diatonic, raw.semitones).ok_or_else(|| {
            de::Error::custom(format!(
                "interval coordinate ({}, {}) exceeds the span of {}",
                raw.diatonic, raw.semitones, MAX_SPAN
            ))
        })
    }
}

/// The directed interval from one pitch to another.
///
/// The sign of the coordinate follows the order the pitches were given in; nothing is
/// normalised to an ascending form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Interval {
    coord: IntervalCoord,
}

impl Interval {
    /// The interval from `start` to `end`.
    ///
    /// # Examples
    /// ```
    /// use diatone_pitch::{Interval, IntervalCoord, Pitch};
    ///
    /// let c4 = Pitch::from_spn("C4").unwrap();
    /// let d4 = Pitch::from_spn("D4").unwrap();
    /// assert_eq!(Interval::new(&c4, &d4).coord(), IntervalCoord::new(1, 2));
    /// ```
    pub fn new(start: &Pitch, end: &Pitch) -> Self {
        // Differences of two i32 counts are within MAX_SPAN.
        Self::from_coord(IntervalCoord {
            diatonic: i64::from(end.diatonic()) - i64::from(start.diatonic()),
            semitones: i64::from(end.semitones()) - i64::from(start.semitones()),
        })
    }

    /// Wraps an explicit coordinate.
    pub const fn from_coord(coord: IntervalCoord) -> Self {
        Self { coord }
    }

    /// The stored coordinate.
    pub fn coord(&self) -> IntervalCoord {
        self.coord
    }

    /// Perfect or imperfect, from the letter span.
    pub fn class(&self) -> IntervalClass {
        IntervalClass::of(self.coord.diatonic)
    }

    /// Semitones away from the natural interval spanning the same number of letters.
    pub fn quality_offset(&self) -> i64 {
        self.coord.semitones - natural_semitones(self.coord.diatonic)
    }

    /// The quality of the interval.
    ///
    /// Spans are reduced with floor-mod, so a descending span is classified as the
    /// ascending span it completes to the octave below.
    ///
    /// # Examples
    /// ```
    /// use diatone_pitch::{Interval, Pitch};
    ///
    /// let g4 = Pitch::from_spn("G4").unwrap();
    /// let cbb5 = Pitch::from_spn("Cbb5").unwrap();
    /// assert_eq!(Interval::new(&g4, &cbb5).quality().to_string(), "dd");
    /// ```
    pub fn quality(&self) -> Quality {
        self.class().quality(self.quality_offset())
    }

    /// Whether the interval moves downward.
    ///
    /// Letter direction decides; for unisons the semitone direction does.
    pub fn is_descending(&self) -> bool {
        self.coord.diatonic < 0 || (self.coord.diatonic == 0 && self.coord.semitones < 0)
    }

    /// The interval with start and end swapped.
    pub fn reversed(&self) -> Self {
        Self::from_coord(-self.coord)
    }

    /// Interval number regardless of direction: unison = 1, second = 2, octave = 8, ...
    pub fn number(&self) -> u64 {
        self.coord.diatonic.unsigned_abs() + 1
    }

    /// Interval number reduced to within one octave (1..=7).
    pub fn simple_number(&self) -> u64 {
        self.coord.diatonic.unsigned_abs() % DIATONICS_PER_OCTAVE as u64 + 1
    }

    /// Whether the interval spans more than an octave's worth of letters.
    pub fn is_compound(&self) -> bool {
        self.coord.diatonic.unsigned_abs() >= DIATONICS_PER_OCTAVE as u64
    }

    /// The interval covering both, or `None` if the sum exceeds [`MAX_SPAN`].
    ///
    /// # Examples
    /// ```
    /// use diatone_pitch::{Interval, Pitch};
    ///
    /// let c4 = Pitch::from_spn("C4").unwrap();
    /// let e4 = Pitch::from_spn("E4").unwrap();
    /// let g4 = Pitch::from_spn("G4").unwrap();
    ///
    /// let fifth = Interval::new(&c4, &e4).checked_add(&Interval::new(&e4, &g4));
    /// assert_eq!(fifth, Some(Interval::new(&c4, &g4)));
    /// ```
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.coord.checked_add(rhs.coord).map(Self::from_coord)
    }

    /// Conventional short name, e.g. `"M6"`, `"P8"`, `"AA5"`.
    ///
    /// The name describes the size of the interval, so a descending interval is named by its
    /// ascending form (C4 down to A3 is `"m3"`). Use [`Interval::is_descending`] for the
    /// direction.
    pub fn name(&self) -> String {
        let ascending = if self.is_descending() {
            self.reversed()
        } else {
            *self
        };
        format!("{}{}", ascending.quality(), ascending.number())
    }
}

impl From<IntervalCoord> for Interval {
    fn from(coord: IntervalCoord) -> Self {
        Self::from_coord(coord)
    }
}

impl Neg for Interval {
    type Output = Self;

    fn neg(self) -> Self {
        self.reversed()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
