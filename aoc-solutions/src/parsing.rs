//! Input parsing helpers shared by the daily solvers

use anyhow::{Context, anyhow};
use aoc_solver::ParseError;
use std::str::FromStr;

/// Parse every non-empty line of `input` with `parse_line`
///
/// Errors carry the 1-based line number. Input that is empty after
/// trimming is reported as missing data.
pub fn parse_lines<T, F>(input: &str, parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: Fn(&str) -> anyhow::Result<T>,
{
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::MissingData("input is empty".to_string()));
    }

    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_idx, line)| {
            parse_line(line.trim()).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
        })
        .collect::<anyhow::Result<Vec<_>>>()
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
}

/// Parse a comma-separated list such as `3,4,3,1,2`
///
/// An empty or all-whitespace line yields an empty list.
pub fn parse_comma_separated<T>(line: &str) -> anyhow::Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let line = line.trim();
    if line.is_empty() {
        return Ok(Vec::new());
    }

    line.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<T>()
                .with_context(|| format!("invalid number {token:?}"))
        })
        .collect()
}

/// Parse the single comma-separated line that makes up a whole input
pub fn parse_single_list<T>(input: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let mut lists = parse_lines(input, parse_comma_separated::<T>)?;
    if lists.len() != 1 {
        return Err(ParseError::InvalidFormat(format!(
            "expected a single comma-separated line, found {} lines",
            lists.len()
        )));
    }
    Ok(lists.remove(0))
}
