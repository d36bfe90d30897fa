//! CLI command implementations

pub mod interval;
pub mod json_output;
pub mod pitch;
pub mod transpose;

mod reporting;
