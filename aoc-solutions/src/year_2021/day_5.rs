//! Day 5: Hydrothermal Venture

use crate::parsing::parse_lines;
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;
use std::str::FromStr;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 5, tags = ["2021", "grid"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl FromStr for Point {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .trim()
            .split_once(',')
            .ok_or_else(|| anyhow!("expected \"x,y\", got {s:?}"))?;
        Ok(Point {
            x: x.trim().parse().with_context(|| format!("invalid x in {s:?}"))?,
            y: y.trim().parse().with_context(|| format!("invalid y in {s:?}"))?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl FromStr for Segment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once("->")
            .ok_or_else(|| anyhow!("expected \"x1,y1 -> x2,y2\", got {s:?}"))?;
        Ok(Segment {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

impl Segment {
    fn is_axis_aligned(&self) -> bool {
        self.start.x == self.end.x || self.start.y == self.end.y
    }

    fn is_diagonal(&self) -> bool {
        (self.end.x - self.start.x).abs() == (self.end.y - self.start.y).abs()
    }

    /// Every integer point on the segment, endpoints included.
    ///
    /// Only horizontal, vertical and 45° segments are rasterized; any other
    /// slope yields no points.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let dx = (self.end.x - self.start.x).signum();
        let dy = (self.end.y - self.start.y).signum();
        let steps = if self.is_axis_aligned() || self.is_diagonal() {
            (self.end.x - self.start.x)
                .abs()
                .max((self.end.y - self.start.y).abs())
                + 1
        } else {
            0
        };

        (0..steps).map(move |i| Point {
            x: self.start.x + i * dx,
            y: self.start.y + i * dy,
        })
    }
}

/// Number of points covered by at least two of the given segments
fn count_overlaps<'a>(segments: impl Iterator<Item = &'a Segment>) -> usize {
    let mut coverage: HashMap<Point, u32> = HashMap::new();
    for segment in segments {
        for point in segment.points() {
            *coverage.entry(point).or_default() += 1;
        }
    }
    coverage.values().filter(|&&count| count >= 2).count()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Segment>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, str::parse)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_overlaps(shared.iter().filter(|s| s.is_axis_aligned())).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_overlaps(shared.iter()).to_string())
    }
}
