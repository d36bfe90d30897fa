//! Diatone CLI - pitch and interval analysis from the command line
//!
//! This binary parses scientific pitch notation, measures intervals between pitches and
//! transposes pitches by exact interval coordinates.

use clap::{ArgGroup, Parser, Subcommand};
use diatone_pitch::{IntervalCoord, PitchCoord, PitchSource};
use std::process::ExitCode;

use diatone_cli::commands;

/// Largest magnitude accepted for raw coordinate arguments.
///
/// Accidentals render one character per semitone, so far-off coordinates would print
/// billions of characters.
const COORD_LIMIT: i64 = 1_000_000;

/// Diatone - exact pitch spelling and interval quality
#[derive(Parser)]
#[command(name = "diatone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect a single pitch given as SPN, a semitone count or a coordinate
    #[command(group(
        ArgGroup::new("source")
            .required(true)
            .args(["spn", "semitones", "coord"])
    ))]
    Pitch {
        /// Scientific pitch notation (e.g. F#6, Dbb4, bb)
        spn: Option<String>,

        /// Semitones above C0
        #[arg(long, allow_negative_numbers = true)]
        semitones: Option<i32>,

        /// Explicit coordinate: letter steps and semitones above C0
        #[arg(
            long,
            num_args = 2,
            value_names = ["DIATONIC", "SEMITONES"],
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i32).range(-COORD_LIMIT..=COORD_LIMIT)
        )]
        coord: Option<Vec<i32>>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Measure the interval from one pitch to another
    Interval {
        /// Start pitch (SPN)
        start: String,

        /// End pitch (SPN)
        end: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Move a pitch by an interval coordinate
    Transpose {
        /// Pitch to move (SPN)
        spn: String,

        /// Letter steps to move by
        #[arg(
            long,
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i32).range(-COORD_LIMIT..=COORD_LIMIT)
        )]
        diatonic: i32,

        /// Semitones to move by
        #[arg(
            long,
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i32).range(-COORD_LIMIT..=COORD_LIMIT)
        )]
        semitones: i32,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

/// Turn the mutually exclusive pitch arguments into a single source.
fn pitch_source(
    spn: Option<String>,
    semitones: Option<i32>,
    coord: Option<Vec<i32>>,
) -> Option<PitchSource> {
    match (spn, semitones, coord.as_deref()) {
        (Some(spn), None, None) => Some(PitchSource::Spn(spn)),
        (None, Some(semitones), None) => Some(PitchSource::Semitones(semitones)),
        (None, None, Some(&[diatonic, semitones])) => {
            Some(PitchSource::Coord(PitchCoord::new(diatonic, semitones)))
        }
        _ => None,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pitch {
            spn,
            semitones,
            coord,
            json,
        } => {
            let source = pitch_source(spn, semitones, coord)
                .expect("clap should have validated the pitch source");
            commands::pitch::run(source, json)
        }
        Commands::Interval { start, end, json } => commands::interval::run(&start, &end, json),
        Commands::Transpose {
            spn,
            diatonic,
            semitones,
            json,
        } => commands::transpose::run(&spn, IntervalCoord::new(diatonic, semitones), json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
