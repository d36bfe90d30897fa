//! Scientific pitch notation parsing.

use std::sync::OnceLock;

use regex::Regex;

use super::PitchCoord;
use crate::diatonic::{
    simple_diatonic_for_letter, DIATONICS_PER_OCTAVE, SCALE_SEMITONES, SEMITONES_PER_OCTAVE,
};
use crate::error::ParseError;

/// Octave assumed when an SPN string carries no octave digits.
pub const DEFAULT_OCTAVE: i32 = 4;

/// Regex pattern for SPN: letter, any number of accidentals, optional signed octave.
const SPN_PATTERN: &str = r"^([A-Ga-g])([b#x]*)(-?[0-9]*)$";

/// Semitone offsets for accidental characters.
const ACCIDENTAL_OFFSETS: [(char, i64); 3] = [('b', -1), ('#', 1), ('x', 2)];

static SPN_REGEX: OnceLock<Regex> = OnceLock::new();

fn spn_regex() -> &'static Regex {
    SPN_REGEX.get_or_init(|| Regex::new(SPN_PATTERN).expect("invalid regex pattern"))
}

/// Sums the offsets of the accidental characters. Unknown characters count as 0.
fn accidental_offset(accidental: &str) -> i64 {
    accidental
        .chars()
        .map(|c| {
            ACCIDENTAL_OFFSETS
                .iter()
                .find(|(symbol, _)| *symbol == c)
                .map(|(_, offset)| *offset)
                .unwrap_or(0)
        })
        .sum()
}

/// Parses the octave group; empty means [`DEFAULT_OCTAVE`], a lone `-` is rejected.
fn parse_octave(octave: &str) -> Option<i32> {
    if octave.is_empty() {
        return Some(DEFAULT_OCTAVE);
    }
    octave.parse().ok()
}

/// Parses an SPN string into a pitch coordinate.
pub(super) fn parse(input: &str) -> Result<PitchCoord, ParseError> {
    let invalid = || ParseError::new(input);

    let caps = spn_regex().captures(input).ok_or_else(invalid)?;

    let letter = caps[1].chars().next().ok_or_else(invalid)?;
    let step = simple_diatonic_for_letter(letter).ok_or_else(invalid)?;
    let offset = accidental_offset(&caps[2]);
    let octave = parse_octave(&caps[3]).map(i64::from).ok_or_else(invalid)?;

    // Out of range means the octave is too large to place on the coordinate grid.
    let diatonic = i32::try_from(octave * DIATONICS_PER_OCTAVE + step).map_err(|_| invalid())?;
    let semitones = octave * SEMITONES_PER_OCTAVE + SCALE_SEMITONES[step as usize] + offset;
    let semitones = i32::try_from(semitones).map_err(|_| invalid())?;

    Ok(PitchCoord::new(diatonic, semitones))
}
