//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type.
///
/// Only structural failures end up here; a missing input file or a failing
/// solver is reported as a per-part error result and does not stop the run.
#[derive(Error, Debug)]
pub enum CliError {
    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_runner::RegistrationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the local input store
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file for the requested year/day
    #[error("No input file for {year}/day{day:02} (looked for {path})")]
    NotFound {
        year: u16,
        day: u8,
        path: String,
    },

    /// IO error while reading an input file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
