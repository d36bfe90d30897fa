//! Interval command implementation
//!
//! Measures the directed interval between two SPN pitches and prints its coordinate,
//! class and quality.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::{CommandOutput, IntervalReport};
use super::reporting::{parse_all, print_interval, print_json, report_parse_errors};

/// Run the interval command
///
/// # Arguments
/// * `start` - Start pitch (SPN)
/// * `end` - End pitch (SPN)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 if either pitch could not be parsed
pub fn run(start: &str, end: &str, json_output: bool) -> Result<ExitCode> {
    let pitches = match parse_all(&[start, end]) {
        Ok(pitches) => pitches,
        Err(errors) => return report_parse_errors(&errors, json_output),
    };

    let report = IntervalReport::new(&pitches[0], &pitches[1]);

    if json_output {
        print_json(&CommandOutput::success(report))?;
    } else {
        println!(
            "{} {} {} {}",
            "Interval:".cyan().bold(),
            report.start,
            "->".dimmed(),
            report.end
        );
        print_interval(&report);
    }

    Ok(ExitCode::SUCCESS)
}
