//! Day 2: Dive!

use crate::parsing::parse_lines;
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::str::FromStr;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 2, tags = ["2021"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (direction, amount) = s
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected \"<direction> <amount>\", got {s:?}"))?;
        let amount: i64 = amount.trim().parse()?;
        if amount < 0 {
            bail!("amount must be non negative");
        }

        match direction {
            "forward" => Ok(Command::Forward(amount)),
            "down" => Ok(Command::Down(amount)),
            "up" => Ok(Command::Up(amount)),
            other => bail!("unknown direction {other:?}"),
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Command>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, str::parse)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (horizontal, depth) =
            shared
                .iter()
                .fold((0i64, 0i64), |(horizontal, depth), command| match *command {
                    Command::Forward(n) => (horizontal + n, depth),
                    Command::Down(n) => (horizontal, depth + n),
                    Command::Up(n) => (horizontal, depth - n),
                });
        Ok((horizontal * depth).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (horizontal, depth, _aim) = shared.iter().fold(
            (0i64, 0i64, 0i64),
            |(horizontal, depth, aim), command| match *command {
                Command::Forward(n) => (horizontal + n, depth + aim * n, aim),
                Command::Down(n) => (horizontal, depth, aim + n),
                Command::Up(n) => (horizontal, depth, aim - n),
            },
        );
        Ok((horizontal * depth).to_string())
    }
}
