//! Failures at each stage: registering a day, parsing its input, answering a part

use thiserror::Error;

/// Raw puzzle input could not be turned into a day's shared data
///
/// Line-oriented parsers put the offending line first, e.g.
/// `(line 3) invalid digit found in string`.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// A token or block does not have the shape the day expects
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// The input is empty or stops before something the day needs
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Parse error: {0}")]
    Other(String),
}

/// A part could not produce an answer from already parsed data
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver knows no part with this number
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Part 0, or a part above the solver's `PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The puzzle has no answer for this input, e.g. a bingo game where no
    /// board ever completes a line. The day's own error is kept as the source.
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Box a day-specific error into [`SolveError::SolveFailed`]
    ///
    /// ```
    /// use aoc_solver::SolveError;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// #[error("no board won")]
    /// struct NoWinner;
    ///
    /// let err = SolveError::failed(NoWinner);
    /// assert_eq!(err.to_string(), "Solve failed: no board won");
    /// ```
    pub fn failed<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SolveError::SolveFailed(Box::new(error))
    }
}

/// Looking up a registered day and parsing its input
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// The registry only holds years 2015-2034 and days 1-25
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Building the registry, either by hand or from submitted plugins
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Two solvers claim the same year and day
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    #[error("Cannot register year {0} day {1}: outside the supported range")]
    InvalidYearDay(u16, u8),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, Error, PartialEq)]
    #[error("no board won after {draws} draw(s)")]
    struct NoWinner {
        draws: usize,
    }

    #[test]
    fn test_failed_keeps_day_error_as_source() {
        let err = SolveError::failed(NoWinner { draws: 12 });
        assert_eq!(err.to_string(), "Solve failed: no board won after 12 draw(s)");

        let source = err.source().unwrap();
        assert_eq!(
            source.downcast_ref::<NoWinner>(),
            Some(&NoWinner { draws: 12 })
        );
    }

    #[test]
    fn test_solver_error_wraps_stage_errors() {
        let parse: SolverError = ParseError::MissingData("input is empty".into()).into();
        assert_eq!(parse.to_string(), "Parse error: Missing data: input is empty");

        let solve: SolverError = SolveError::PartOutOfRange(3).into();
        assert_eq!(solve.to_string(), "Solve error: Part 3 is out of range");
    }
}
