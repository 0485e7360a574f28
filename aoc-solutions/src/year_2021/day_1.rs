//! Day 1: Sonar Sweep

use crate::parsing::parse_lines;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 1, tags = ["2021"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| Ok(line.parse::<u32>()?))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_increases(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_increases(shared, 3).to_string())
    }
}

/// Count how often the sum of a `window`-wide sliding window grows.
///
/// Consecutive windows share all but one element, so comparing the sums is
/// the same as comparing the element leaving with the one entering.
fn count_increases(depths: &[u32], window: usize) -> usize {
    depths
        .windows(window + 1)
        .filter(|w| w[window] > w[0])
        .count()
}
