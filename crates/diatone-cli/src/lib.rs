//! Diatone CLI library.
//!
//! This crate provides the command implementations behind the `diatone` binary: pitch
//! inspection, interval analysis and transposition, each with colored human output and a
//! `--json` mode for tools.

pub mod commands;
