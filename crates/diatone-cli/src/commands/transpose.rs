//! Transpose command implementation

use anyhow::Result;
use colored::Colorize;
use diatone_pitch::{Interval, IntervalCoord, Pitch};
use std::process::ExitCode;

use super::json_output::{error_codes, CommandOutput, JsonError, PitchReport, TransposeReport};
use super::reporting::{print_json, print_pitch, report_errors, report_parse_errors};

/// Moves `pitch` by the given coordinate, or `None` if the result leaves the coordinate range.
pub fn transpose(pitch: &Pitch, by: IntervalCoord) -> Option<TransposeReport> {
    let to = pitch.transpose(&Interval::from_coord(by))?;
    Some(TransposeReport {
        from: PitchReport::from(pitch),
        by,
        to: PitchReport::from(&to),
    })
}

/// Run the transpose command
///
/// # Arguments
/// * `spn` - Pitch to move (SPN)
/// * `by` - Interval coordinate to move by
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 if the pitch could not be parsed or moved
pub fn run(spn: &str, by: IntervalCoord, json_output: bool) -> Result<ExitCode> {
    let pitch = match Pitch::from_spn(spn) {
        Ok(pitch) => pitch,
        Err(err) => return report_parse_errors(&[err], json_output),
    };

    let report = match transpose(&pitch, by) {
        Some(report) => report,
        None => {
            let message = format!(
                "{} moved by ({}, {}) leaves the coordinate range",
                pitch,
                by.diatonic(),
                by.semitones()
            );
            let error = JsonError::new(error_codes::TRANSPOSE_OUT_OF_RANGE, message)
                .with_input(spn);
            return report_errors(vec![error], json_output);
        }
    };

    if json_output {
        print_json(&CommandOutput::success(report))?;
    } else {
        println!(
            "{} {} {} ({}, {})",
            "Transposing:".cyan().bold(),
            report.from.spn,
            "by".dimmed(),
            by.diatonic(),
            by.semitones()
        );
        print_pitch(&report.to);
        println!("  {} {}", "Interval:".dimmed(), Interval::from_coord(by));
    }

    Ok(ExitCode::SUCCESS)
}
