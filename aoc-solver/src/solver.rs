//! Parsing and per-part solving traits

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle input into the data every part of a day works on
///
/// Parsing runs once per input; all parts then share the result, so a
/// later part can reuse whatever an earlier part computed.
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct SonarSweep;
///
/// impl AocParser for SonarSweep {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Vec<u32>, ParseError> {
///         input
///             .lines()
///             .map(|depth| {
///                 depth
///                     .parse()
///                     .map_err(|_| ParseError::InvalidFormat(format!("depth {depth:?}")))
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(SonarSweep::parse("199\n200\n208").unwrap(), vec![199, 200, 208]);
/// ```
pub trait AocParser {
    /// Parsed input plus anything parts want to memoise between each other.
    /// May borrow from the input through `'a`.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Answer for part `N` of a day
///
/// `#[derive(AocSolver)]` wires `PartSolver<1>..=PartSolver<max_parts>` into
/// [`Solver::solve_part`], so forgetting a part fails to compile.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Dive;
///
/// impl AocParser for Dive {
///     type SharedData<'a> = Vec<(&'a str, i64)>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 let (dir, n) = line
///                     .split_once(' ')
///                     .ok_or_else(|| ParseError::InvalidFormat(line.to_string()))?;
///                 let n = n.parse().map_err(|_| ParseError::InvalidFormat(line.to_string()))?;
///                 Ok((dir, n))
///             })
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Dive {
///     fn solve(commands: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         let (mut pos, mut depth) = (0, 0);
///         for &(dir, n) in commands.iter() {
///             match dir {
///                 "forward" => pos += n,
///                 "down" => depth += n,
///                 _ => depth -= n,
///             }
///         }
///         Ok((pos * depth).to_string())
///     }
/// }
///
/// let mut commands = Dive::parse("forward 5\ndown 5\nforward 8\nup 3").unwrap();
/// assert_eq!(<Dive as PartSolver<1>>::solve(&mut commands).unwrap(), "26");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A whole day: parsing plus `PARTS` numbered answers
///
/// Usually derived; a hand-written impl looks like this:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Lanternfish;
///
/// impl AocParser for Lanternfish {
///     type SharedData<'a> = [u64; 9];
///
///     fn parse(input: &str) -> Result<[u64; 9], ParseError> {
///         let mut timers = [0; 9];
///         for t in input.trim().split(',') {
///             let t: usize = t.parse().map_err(|_| ParseError::InvalidFormat(t.to_string()))?;
///             *timers
///                 .get_mut(t)
///                 .ok_or_else(|| ParseError::InvalidFormat(format!("timer {t}")))? += 1;
///         }
///         Ok(timers)
///     }
/// }
///
/// impl Solver for Lanternfish {
///     const PARTS: u8 = 1;
///
///     fn solve_part(timers: &mut [u64; 9], part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => {
///                 for _ in 0..18 {
///                     timers.rotate_left(1);
///                     timers[6] += timers[8];
///                 }
///                 Ok(timers.iter().sum::<u64>().to_string())
///             }
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut timers = Lanternfish::parse("3,4,3,1,2").unwrap();
/// assert_eq!(Lanternfish::solve_part(&mut timers, 1).unwrap(), "26");
/// ```
pub trait Solver: AocParser {
    /// Parts are numbered `1..=PARTS`
    const PARTS: u8;

    /// Returns `PartNotImplemented` for part numbers it does not know
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked part dispatch, implemented for every [`Solver`]
pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
