//! Pitch command implementation
//!
//! Builds a single pitch from SPN, a semitone count or a raw coordinate and prints its
//! spelling and coordinate.

use anyhow::Result;
use colored::Colorize;
use diatone_pitch::{Pitch, PitchSource};
use std::process::ExitCode;

use super::json_output::{CommandOutput, PitchReport};
use super::reporting::{print_json, print_pitch, report_parse_errors};

/// Run the pitch command
///
/// # Arguments
/// * `source` - Where the pitch comes from (exactly one source)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 if the SPN could not be parsed
pub fn run(source: PitchSource, json_output: bool) -> Result<ExitCode> {
    let pitch = match Pitch::new(source) {
        Ok(pitch) => pitch,
        Err(err) => return report_parse_errors(&[err], json_output),
    };

    let report = PitchReport::from(&pitch);

    if json_output {
        print_json(&CommandOutput::success(report))?;
    } else {
        println!("{}", "Pitch:".cyan().bold());
        print_pitch(&report);
    }

    Ok(ExitCode::SUCCESS)
}
