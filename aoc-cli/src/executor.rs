//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::ExecutorError;
use crate::inputs::InputDirectory;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::sync::Arc;
use tracing::{debug, warn};

/// Result from a single part execution
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ExecutorError>,
    pub solve_duration: TimeDelta,
    /// Set on the first part of each day, which pays for parsing
    pub parse_duration: Option<TimeDelta>,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs the selected solvers one day at a time, in (year, day, part) order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputDirectory,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputDirectory::new(config.input_dir.clone()),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    pub fn inputs(&self) -> &InputDirectory {
        &self.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items, handing each part's result to `emit` as soon as it is known
    pub fn execute(&self, mut emit: impl FnMut(SolverResult)) {
        for work in self.collect_work_items() {
            self.run_work_item(&work, &mut emit);
        }
    }

    fn run_work_item(&self, work: &WorkItem, emit: &mut impl FnMut(SolverResult)) {
        let (year, day) = (work.year, work.day);
        debug!(year, day, parts = ?work.parts, "running solver");

        let input = match self.inputs.read(year, day) {
            Ok(input) => input,
            Err(e) => {
                warn!(year, day, error = %e, "skipping solver without input");
                let source = Arc::new(e);
                for part in work.parts.clone() {
                    emit(failed(work, part, ExecutorError::Input {
                        year,
                        day,
                        source: Arc::clone(&source),
                    }));
                }
                return;
            }
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                let source = Arc::new(e);
                for part in work.parts.clone() {
                    emit(failed(work, part, ExecutorError::Setup {
                        year,
                        day,
                        source: Arc::clone(&source),
                    }));
                }
                return;
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        for part in work.parts.clone() {
            let mut result = solve_part(year, day, part, &mut *solver);
            result.parse_duration = parse_duration.take();
            emit(result);
        }
    }
}

fn failed(work: &WorkItem, part: u8, error: ExecutorError) -> SolverResult {
    SolverResult {
        year: work.year,
        day: work.day,
        part,
        answer: Err(error),
        solve_duration: TimeDelta::zero(),
        parse_duration: None,
    }
}

fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    match solver.solve(part) {
        Ok(result) => SolverResult {
            year,
            day,
            part,
            solve_duration: result.duration(),
            answer: Ok(result.answer),
            parse_duration: None,
        },
        Err(e) => SolverResult {
            year,
            day,
            part,
            answer: Err(e.into()),
            solve_duration: TimeDelta::zero(),
            parse_duration: None,
        },
    }
}
