//! Integration tests for the `diatone` commands.
//!
//! Tests verify:
//! - Exit codes (0 on success, 1 on bad input, 2 on usage errors)
//! - The JSON document printed under `--json`
//! - Error collection across several inputs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p diatone-cli --test test_commands
//! ```

use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::Value;

// =============================================================================
// Helper Functions
// =============================================================================

fn diatone(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_diatone"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run diatone")
}

fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("Failed to parse JSON output: {}\n{}", e, stdout))
}

fn error_codes(json: &Value) -> Vec<String> {
    json["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .map(|e| e["code"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// pitch
// =============================================================================

#[test]
fn test_pitch_json_success() {
    let output = diatone(&["pitch", "F#6", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    assert_eq!(json["success"], true);
    assert_eq!(json["errors"].as_array().unwrap().len(), 0);
    assert_eq!(json["result"]["spn"], "F#6");
    assert_eq!(json["result"]["accidental_offset"], 1);
    assert_eq!(json["result"]["coord"]["diatonic"], 45);
    assert_eq!(json["result"]["coord"]["semitones"], 78);
}

#[test]
fn test_pitch_json_parse_error() {
    let output = diatone(&["pitch", "H4", "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let json = stdout_json(&output);
    assert_eq!(json["success"], false);
    assert!(json.get("result").is_none());
    assert_eq!(error_codes(&json), vec!["PITCH_001"]);
    assert_eq!(json["errors"][0]["input"], "H4");
    assert_eq!(
        json["errors"][0]["message"],
        "cannot parse invalid scientific pitch notation: H4"
    );
}

#[test]
fn test_pitch_from_semitones_human_output() {
    let output = diatone(&["pitch", "--semitones", "61"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("C#5"), "{}", stdout);
}

#[test]
fn test_pitch_human_parse_error_goes_to_stderr() {
    let output = diatone(&["pitch", "C-"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("PITCH_001"), "{}", stderr);
    assert!(stderr.contains("C-"), "{}", stderr);
}

#[test]
fn test_pitch_rejects_far_off_coordinate() {
    let output = diatone(&["pitch", "--coord", "2000000000", "0"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

// =============================================================================
// interval
// =============================================================================

#[test]
fn test_interval_json_success() {
    let output = diatone(&["interval", "C4", "F#6", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    assert_eq!(json["success"], true);
    assert_eq!(json["result"]["coord"]["diatonic"], 17);
    assert_eq!(json["result"]["coord"]["semitones"], 30);
    assert_eq!(json["result"]["quality"], "A");
    assert_eq!(json["result"]["name"], "A18");
    assert_eq!(json["result"]["class"], "perfect");
}

#[test]
fn test_interval_reports_every_bad_input() {
    let output = diatone(&["interval", "H4", "Q2", "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let json = stdout_json(&output);
    assert_eq!(json["success"], false);
    assert_eq!(error_codes(&json), vec!["PITCH_001", "PITCH_001"]);
    assert_eq!(json["errors"][0]["input"], "H4");
    assert_eq!(json["errors"][1]["input"], "Q2");
}

#[test]
fn test_interval_one_bad_input() {
    let output = diatone(&["interval", "C4", "Q2", "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let json = stdout_json(&output);
    assert_eq!(json["errors"].as_array().unwrap().len(), 1);
    assert_eq!(json["errors"][0]["input"], "Q2");
}

#[test]
fn test_interval_human_output() {
    let output = diatone(&["interval", "G4", "Cbb5"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dd4"), "{}", stdout);
}

// =============================================================================
// transpose
// =============================================================================

#[test]
fn test_transpose_json_success() {
    let output = diatone(&[
        "transpose",
        "Eb3",
        "--diatonic",
        "5",
        "--semitones",
        "9",
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    assert_eq!(json["success"], true);
    assert_eq!(json["result"]["from"]["spn"], "Eb3");
    assert_eq!(json["result"]["to"]["spn"], "C4");
    assert_eq!(json["result"]["by"]["diatonic"], 5);
}

#[test]
fn test_transpose_downward_human_output() {
    let output = diatone(&["transpose", "C4", "--diatonic", "-2", "--semitones", "-3"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("A3"), "{}", stdout);
}

#[test]
fn test_transpose_parse_error() {
    let output = diatone(&[
        "transpose",
        "Hb4",
        "--diatonic",
        "1",
        "--semitones",
        "2",
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(1));

    let json = stdout_json(&output);
    assert_eq!(error_codes(&json), vec!["PITCH_001"]);
}

#[test]
fn test_transpose_out_of_range() {
    let output = diatone(&[
        "transpose",
        "C178956970",
        "--diatonic",
        "0",
        "--semitones",
        "8",
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(1));

    let json = stdout_json(&output);
    assert_eq!(json["success"], false);
    assert_eq!(error_codes(&json), vec!["CLI_001"]);
    assert_eq!(json["errors"][0]["input"], "C178956970");
}
