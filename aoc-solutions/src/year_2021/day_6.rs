//! Day 6: Lanternfish

use crate::parsing::parse_single_list;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 6, tags = ["2021", "simulation"])]
pub struct Solver;

/// Timer a newborn fish starts with
const NEWBORN_TIMER: usize = 8;
/// Timer a fish resets to after spawning
const RESET_TIMER: usize = 6;

/// Fish counts indexed by internal timer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct School([u64; NEWBORN_TIMER + 1]);

impl School {
    pub fn step(&mut self) {
        self.0.rotate_left(1);
        // The fish that were at 0 wrapped around to index 8 as newborns
        self.0[RESET_TIMER] += self.0[NEWBORN_TIMER];
    }

    pub fn population_after(mut self, days: usize) -> u64 {
        for _ in 0..days {
            self.step();
        }
        self.0.iter().sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = School;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let timers = parse_single_list::<usize>(input)?;
        let mut school = School::default();
        for timer in timers {
            if timer > NEWBORN_TIMER {
                return Err(ParseError::InvalidFormat(format!(
                    "timer {timer} is larger than {NEWBORN_TIMER}"
                )));
            }
            school.0[timer] += 1;
        }
        Ok(school)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.population_after(80).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.population_after(256).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "3,4,3,1,2\n";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.population_after(18), 26);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "5934");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "26984457539");
    }

    #[test]
    fn test_spawn_cycle() {
        let mut school = Solver::parse("0").unwrap();
        school.step();
        assert_eq!(school.0, [0, 0, 0, 0, 0, 0, 1, 0, 1]);
        assert_eq!(school.population_after(7), 3);
    }

    #[test]
    fn test_rejects_bad_timers() {
        assert!(matches!(Solver::parse("3,9"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Solver::parse("3,-1"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Solver::parse(""), Err(ParseError::MissingData(_))));
    }
}
