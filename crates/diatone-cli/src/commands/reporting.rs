use anyhow::{Context, Result};
use colored::Colorize;
use diatone_pitch::{ParseError, Pitch};
use serde::Serialize;
use std::process::ExitCode;

use super::json_output::{CommandOutput, IntervalReport, JsonError, PitchReport};

/// Print a JSON document to stdout.
pub(crate) fn print_json<T: Serialize>(output: &CommandOutput<T>) -> Result<()> {
    let json = serde_json::to_string_pretty(output).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}

/// Report errors in the requested style and return the failure exit code.
pub(crate) fn report_errors(errors: Vec<JsonError>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        let output: CommandOutput<()> = CommandOutput::failure(errors);
        print_json(&output)?;
    } else {
        for err in &errors {
            eprintln!("{} [{}] {}", "error:".red().bold(), err.code, err.message);
        }
    }
    Ok(ExitCode::FAILURE)
}

/// Report parse errors in the requested style and return the failure exit code.
pub(crate) fn report_parse_errors(errors: &[ParseError], json_output: bool) -> Result<ExitCode> {
    report_errors(errors.iter().map(JsonError::from).collect(), json_output)
}

/// Parse every SPN argument, collecting all failures instead of stopping at the first.
pub(crate) fn parse_all(inputs: &[&str]) -> Result<Vec<Pitch>, Vec<ParseError>> {
    let mut pitches = Vec::with_capacity(inputs.len());
    let mut errors = Vec::new();
    for input in inputs {
        match Pitch::from_spn(input) {
            Ok(pitch) => pitches.push(pitch),
            Err(err) => errors.push(err),
        }
    }
    if errors.is_empty() {
        Ok(pitches)
    } else {
        Err(errors)
    }
}

pub(crate) fn print_pitch(report: &PitchReport) {
    println!("  {} {}", "SPN:".dimmed(), report.spn.bold());
    println!("  {} {}", "Letter:".dimmed(), report.letter);
    let accidental = if report.accidental.is_empty() {
        "(natural)".to_string()
    } else {
        format!("{} ({:+})", report.accidental, report.accidental_offset)
    };
    println!("  {} {}", "Accidental:".dimmed(), accidental);
    println!("  {} {}", "Octave:".dimmed(), report.octave);
    println!(
        "  {} ({}, {})",
        "Coord:".dimmed(),
        report.coord.diatonic,
        report.coord.semitones
    );
}

pub(crate) fn print_interval(report: &IntervalReport) {
    let direction = if report.descending {
        "descending"
    } else {
        "ascending"
    };
    println!(
        "  {} {} ({})",
        "Name:".dimmed(),
        report.name.bold(),
        direction
    );
    println!(
        "  {} {} ({}, offset {:+})",
        "Quality:".dimmed(),
        report.quality,
        report.class,
        report.quality_offset
    );
    println!("  {} {}", "Number:".dimmed(), report.number);
    println!(
        "  {} ({}, {})",
        "Coord:".dimmed(),
        report.coord.diatonic(),
        report.coord.semitones()
    );
}
