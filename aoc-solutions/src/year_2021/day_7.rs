//! Day 7: The Treachery of Whales

use crate::parsing::parse_single_list;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use thiserror::Error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 7, tags = ["2021"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FuelError {
    #[error("fuel to align on {target} does not fit in 64 bits")]
    Overflow { target: u64 },
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let positions = parse_single_list::<u64>(input)?;
        if positions.is_empty() {
            return Err(ParseError::MissingData("no crab positions".to_string()));
        }
        Ok(positions)
    }
}

/// Fuel for one crab to move `distance`. Both costs stay below 2^127 for
/// any `u64` distance.
type Cost = fn(u64) -> u128;

fn linear(distance: u64) -> u128 {
    u128::from(distance)
}

fn triangular(distance: u64) -> u128 {
    let d = u128::from(distance);
    d * (d + 1) / 2
}

/// Change in total fuel when the target moves from `target` to `target + 1`
fn slope(positions: &[u64], target: u64, cost: Cost) -> i128 {
    positions
        .iter()
        .map(|&p| cost(p.abs_diff(target + 1)) as i128 - cost(p.abs_diff(target)) as i128)
        .sum()
}

fn total_fuel(positions: &[u64], target: u64, cost: Cost) -> Result<u64, FuelError> {
    positions
        .iter()
        .try_fold(0u64, |sum, &p| {
            u64::try_from(cost(p.abs_diff(target)))
                .ok()
                .and_then(|fuel| sum.checked_add(fuel))
        })
        .ok_or(FuelError::Overflow { target })
}

/// Cheapest total fuel to align every crab on one target between the
/// leftmost and rightmost crab
///
/// Total fuel is convex in the target for both costs, so the optimum is the
/// first target whose slope is not negative.
fn min_fuel(positions: &[u64], cost: Cost) -> Result<u64, FuelError> {
    let mut lo = positions.iter().copied().min().unwrap_or_default();
    let mut hi = positions.iter().copied().max().unwrap_or_default();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if slope(positions, mid, cost) >= 0 {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    total_fuel(positions, lo, cost)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        min_fuel(shared, linear)
            .map(|fuel| fuel.to_string())
            .map_err(SolveError::failed)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        min_fuel(shared, triangular)
            .map(|fuel| fuel.to_string())
            .map_err(SolveError::failed)
    }
}
