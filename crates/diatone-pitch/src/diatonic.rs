//! Diatonic/semitone conversion table.
//!
//! Diatonic counts are letter steps from C0, semitone counts are absolute semitones from C0.
//! All reductions use floor semantics so that negative counts (pitches below C0, descending
//! intervals) land in the right octave.
//!
//! Counts are taken as `i64` so that pitch coordinates (`i32`) and the spans between them
//! never overflow.

/// Letter steps per octave.
pub const DIATONICS_PER_OCTAVE: i64 = 7;

/// Semitones per octave.
pub const SEMITONES_PER_OCTAVE: i64 = 12;

/// Natural semitone offsets of the seven diatonic steps (C=0, D=2, E=4, F=5, G=7, A=9, B=11).
pub const SCALE_SEMITONES: [i64; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Letter names indexed by simple diatonic.
pub const LETTERS: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];

/// Reduces a diatonic count to its step within the octave (0 = C ... 6 = B).
pub fn simplify_diatonic(diatonic: i64) -> i64 {
    diatonic.rem_euclid(DIATONICS_PER_OCTAVE)
}

/// Returns the octave a diatonic count falls in.
pub fn diatonic_octave(diatonic: i64) -> i64 {
    diatonic.div_euclid(DIATONICS_PER_OCTAVE)
}

/// Returns the semitone count of the unaltered step `diatonic` letter steps above C0.
///
/// Works for any span, so the same function serves absolute pitches and multi-octave
/// (or descending) interval spans. Exact for every pitch coordinate and every interval
/// between two pitches; counts whose natural size does not fit in an `i64` saturate.
///
/// # Examples
/// ```
/// use diatone_pitch::diatonic::natural_semitones;
///
/// assert_eq!(natural_semitones(5), 9); // A0
/// assert_eq!(natural_semitones(17), 29); // compound fourth
/// assert_eq!(natural_semitones(-1), -1); // B below C0
/// ```
pub fn natural_semitones(diatonic: i64) -> i64 {
    let octave = diatonic_octave(diatonic);
    let step = simplify_diatonic(diatonic) as usize;
    octave
        .saturating_mul(SEMITONES_PER_OCTAVE)
        .saturating_add(SCALE_SEMITONES[step])
}

/// Returns the diatonic count whose natural semitone value is closest to `semitones`.
///
/// A count that falls between two naturals is one semitone away from both; such ties go to
/// the lower step, so the count is spelled as a sharp (1 -> C, 6 -> F).
///
/// # Examples
/// ```
/// use diatone_pitch::diatonic::nearest_diatonic;
///
/// assert_eq!(nearest_diatonic(0), 0); // C0
/// assert_eq!(nearest_diatonic(1), 0); // C#0
/// assert_eq!(nearest_diatonic(2), 1); // D0
/// assert_eq!(nearest_diatonic(-1), -1); // B-1
/// ```
pub fn nearest_diatonic(semitones: i32) -> i32 {
    let semitones = i64::from(semitones);
    let octave = semitones.div_euclid(SEMITONES_PER_OCTAVE);
    let within = semitones.rem_euclid(SEMITONES_PER_OCTAVE);

    // Steps are ascending and start at 0, so there is always a match.
    let step = SCALE_SEMITONES
        .iter()
        .rposition(|&natural| natural <= within)
        .unwrap_or(0) as i64;

    // Seven steps per twelve semitones: the result is smaller in magnitude than the input.
    (octave * DIATONICS_PER_OCTAVE + step) as i32
}

/// Returns the letter for a diatonic count.
pub fn letter_for(diatonic: i64) -> char {
    LETTERS[simplify_diatonic(diatonic) as usize]
}

/// Returns the simple diatonic (0..=6) of a letter, case-insensitively.
pub fn simple_diatonic_for_letter(letter: char) -> Option<i64> {
    let upper = letter.to_ascii_uppercase();
    LETTERS
        .iter()
        .position(|&l| l == upper)
        .map(|step| step as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplify_diatonic() {
        assert_eq!(simplify_diatonic(0), 0);
        assert_eq!(simplify_diatonic(6), 6);
        assert_eq!(simplify_diatonic(7), 0);
        assert_eq!(simplify_diatonic(31), 3);
        assert_eq!(simplify_diatonic(-1), 6);
        assert_eq!(simplify_diatonic(-7), 0);
        assert_eq!(simplify_diatonic(-10), 4);
    }

    #[test]
    fn test_diatonic_octave() {
        assert_eq!(diatonic_octave(0), 0);
        assert_eq!(diatonic_octave(6), 0);
        assert_eq!(diatonic_octave(28), 4);
        assert_eq!(diatonic_octave(-1), -1);
        assert_eq!(diatonic_octave(-7), -1);
        assert_eq!(diatonic_octave(-8), -2);
    }

    #[test]
    fn test_natural_semitones_single_octave() {
        let expected = [0, 2, 4, 5, 7, 9, 11];
        for (step, semitones) in expected.iter().enumerate() {
            assert_eq!(natural_semitones(step as i64), *semitones);
        }
    }

    #[test]
    fn test_natural_semitones_multi_octave() {
        assert_eq!(natural_semitones(7), 12);
        assert_eq!(natural_semitones(9), 16);
        assert_eq!(natural_semitones(28), 48); // C4
        assert_eq!(natural_semitones(33), 57); // A4
    }

    #[test]
    fn test_natural_semitones_negative() {
        // Truncating remainder would index the table with a negative step here.
        assert_eq!(natural_semitones(-1), -1);
        assert_eq!(natural_semitones(-2), -3);
        assert_eq!(natural_semitones(-3), -5);
        assert_eq!(natural_semitones(-7), -12);
        assert_eq!(natural_semitones(-10), -17);
    }

    #[test]
    fn test_nearest_diatonic_on_naturals() {
        for diatonic in -21..=21i32 {
            let semitones = natural_semitones(diatonic.into()) as i32;
            assert_eq!(nearest_diatonic(semitones), diatonic);
        }
    }

    #[test]
    fn test_nearest_diatonic_ties_go_to_lower_step() {
        assert_eq!(nearest_diatonic(1), 0); // C#, not Db
        assert_eq!(nearest_diatonic(3), 1); // D#
        assert_eq!(nearest_diatonic(6), 3); // F#
        assert_eq!(nearest_diatonic(8), 4); // G#
        assert_eq!(nearest_diatonic(10), 5); // A#
        assert_eq!(nearest_diatonic(61), 35); // C#5
        assert_eq!(nearest_diatonic(-2), -2); // A#-1
    }

    #[test]
    fn test_extreme_counts_do_not_overflow() {
        let max = i64::from(i32::MAX);
        let min = i64::from(i32::MIN);
        assert_eq!(natural_semitones(max), 3_681_400_538);
        assert_eq!(natural_semitones(min), -3_681_400_539);
        assert_eq!(natural_semitones(i64::MAX), i64::MAX);
        assert_eq!(natural_semitones(i64::MIN), i64::MIN + 11); // a B, octave saturated

        assert_eq!(nearest_diatonic(i32::MAX), 1_252_698_794);
        assert_eq!(nearest_diatonic(i32::MIN), -1_252_698_795);
    }

    #[test]
    fn test_letters() {
        assert_eq!(letter_for(0), 'C');
        assert_eq!(letter_for(6), 'B');
        assert_eq!(letter_for(-1), 'B');
        assert_eq!(letter_for(33), 'A');
        assert_eq!(simple_diatonic_for_letter('c'), Some(0));
        assert_eq!(simple_diatonic_for_letter('G'), Some(4));
        assert_eq!(simple_diatonic_for_letter('H'), None);
    }
}
