//! Day 3: Binary Diagnostic

use crate::parsing::parse_lines;
use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::cmp::Ordering;
use thiserror::Error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 3, tags = ["2021", "bits"])]
pub struct Solver;

/// Diagnostic report: equal-width binary numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    values: Vec<u32>,
    width: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    #[error("equal number of 0s and 1s at bit position {0}")]
    Tie(usize),
    #[error("no values left while filtering for the {0} rating")]
    Exhausted(&'static str),
}

/// Which bit a rating keeps while filtering
#[derive(Debug, Clone, Copy)]
enum BitCriteria {
    /// Keep the most common bit, `1` on ties
    MostCommon,
    /// Keep the least common bit, `0` on ties
    LeastCommon,
}

impl Report {
    /// Bit index `position` counted from the most significant column
    fn bit(&self, value: u32, position: usize) -> bool {
        (value >> (self.width - 1 - position)) & 1 == 1
    }

    /// Compare the number of ones against the number of zeros at `position`
    fn balance<'a>(&self, values: impl Iterator<Item = &'a u32>, position: usize) -> Ordering {
        let (ones, zeros) = values.fold((0usize, 0usize), |(ones, zeros), &value| {
            if self.bit(value, position) {
                (ones + 1, zeros)
            } else {
                (ones, zeros + 1)
            }
        });
        ones.cmp(&zeros)
    }

    fn power_consumption(&self) -> Result<u64, DiagnosticError> {
        let mut gamma = 0u64;
        for position in 0..self.width {
            let bit = match self.balance(self.values.iter(), position) {
                Ordering::Greater => 1,
                Ordering::Less => 0,
                Ordering::Equal => return Err(DiagnosticError::Tie(position)),
            };
            gamma = (gamma << 1) | bit;
        }
        let epsilon = !gamma & ((1u64 << self.width) - 1);
        Ok(gamma * epsilon)
    }

    fn rating(&self, criteria: BitCriteria, name: &'static str) -> Result<u64, DiagnosticError> {
        let mut remaining = self.values.clone();

        for position in 0..self.width {
            if remaining.len() == 1 {
                break;
            }
            let more_ones = self.balance(remaining.iter(), position) != Ordering::Less;
            let keep = match criteria {
                BitCriteria::MostCommon => more_ones,
                BitCriteria::LeastCommon => !more_ones,
            };
            remaining.retain(|&value| self.bit(value, position) == keep);
        }

        match remaining.as_slice() {
            [value] => Ok(u64::from(*value)),
            _ => Err(DiagnosticError::Exhausted(name)),
        }
    }

    fn life_support(&self) -> Result<u64, DiagnosticError> {
        let oxygen = self.rating(BitCriteria::MostCommon, "oxygen generator")?;
        let co2 = self.rating(BitCriteria::LeastCommon, "CO2 scrubber")?;
        Ok(oxygen * co2)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Report;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rows = parse_lines(input, |line| {
            if line.len() > 32 || !line.bytes().all(|b| b == b'0' || b == b'1') {
                bail!("expected up to 32 binary digits, got {line:?}");
            }
            Ok((u32::from_str_radix(line, 2)?, line.len()))
        })?;

        let width = rows[0].1;
        if let Some(row) = rows.iter().position(|&(_, w)| w != width) {
            return Err(ParseError::InvalidFormat(format!(
                "value {} has {} digits, expected {}",
                row + 1,
                rows[row].1,
                width
            )));
        }

        Ok(Report {
            values: rows.into_iter().map(|(value, _)| value).collect(),
            width,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .power_consumption()
            .map(|answer| answer.to_string())
            .map_err(SolveError::failed)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .life_support()
            .map(|answer| answer.to_string())
            .map_err(SolveError::failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
00100
11110
10110
10111
10101
01111
00111
11100
10000
11001
00010
01010
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.width, 5);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "198");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "230");
    }

    #[test]
    fn test_ratings() {
        let report = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(report.rating(BitCriteria::MostCommon, "oxygen"), Ok(23));
        assert_eq!(report.rating(BitCriteria::LeastCommon, "co2"), Ok(10));
    }

    #[test]
    fn test_gamma_tie_is_an_error() {
        let report = Solver::parse("10\n01\n").unwrap();
        assert_eq!(report.power_consumption(), Err(DiagnosticError::Tie(0)));
    }

    #[test]
    fn test_rating_ties_pick_one_then_zero() {
        let report = Solver::parse("10\n01\n").unwrap();
        assert_eq!(report.rating(BitCriteria::MostCommon, "oxygen"), Ok(0b10));
        assert_eq!(report.rating(BitCriteria::LeastCommon, "co2"), Ok(0b01));
    }

    #[test]
    fn test_duplicates_cannot_be_narrowed() {
        let report = Solver::parse("11\n11\n").unwrap();
        assert_eq!(
            report.rating(BitCriteria::MostCommon, "oxygen"),
            Err(DiagnosticError::Exhausted("oxygen"))
        );
    }

    #[test]
    fn test_rejects_mixed_widths_and_digits() {
        assert!(matches!(
            Solver::parse("101\n10\n"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Solver::parse("101\n102\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
