//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// At least one selected solver did not produce an answer
    #[error("{failed} of {total} part(s) failed")]
    Failed { failed: usize, total: usize },
}

/// Errors reading puzzle inputs from the input directory
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file for the year/day
    #[error("No input file at {}", .0.display())]
    Missing(PathBuf),

    /// The file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single part produced no answer
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Input could not be loaded for the part's day
    #[error("Input unavailable for {year}/{day:02}: {source}")]
    Input {
        year: u16,
        day: u8,
        #[source]
        source: std::sync::Arc<InputError>,
    },

    /// Solver lookup or input parsing failed for the part's day
    #[error("Could not create solver for {year}/{day:02}: {source}")]
    Setup {
        year: u16,
        day: u8,
        #[source]
        source: std::sync::Arc<aoc_solver::SolverError>,
    },

    /// The part itself failed
    #[error(transparent)]
    Solve(#[from] aoc_solver::SolveError),
}
