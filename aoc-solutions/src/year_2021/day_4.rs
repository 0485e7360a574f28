//! Day 4: Giant Squid
//!
//! Bingo against a set of 5×5 boards. Every board that has not yet won
//! plays each drawn number; a board wins once any full row or column is
//! marked and is then frozen. Part 1 is the score of the first board to
//! win, part 2 the score of the last one.

use crate::parsing::parse_comma_separated;
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use thiserror::Error;
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 4, tags = ["2021", "simulation"])]
pub struct Solver;

/// Width and height of a board
pub const BOARD_SIZE: usize = 5;
const TILE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    pub value: i64,
    pub marked: bool,
}

/// A 5×5 bingo board stored row-major, tile `(row, col)` at `col + row * 5`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [Tile; TILE_COUNT],
    has_win: bool,
}

impl Board {
    pub fn new(values: [i64; TILE_COUNT]) -> Self {
        Self {
            tiles: values.map(|value| Tile {
                value,
                marked: false,
            }),
            has_win: false,
        }
    }

    /// Build a board from five rows of five whitespace-separated numbers
    pub fn from_rows<'a, I>(rows: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut values = [0i64; TILE_COUNT];
        let mut row_count = 0;

        for (row, line) in rows.into_iter().enumerate() {
            if row >= BOARD_SIZE {
                bail!("board has more than {BOARD_SIZE} rows");
            }
            let cells = line
                .split_whitespace()
                .map(|cell| {
                    cell.parse::<i64>()
                        .map_err(|e| anyhow!("invalid cell {cell:?}: {e}"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            if cells.len() != BOARD_SIZE {
                bail!(
                    "row {} has {} cells, expected {BOARD_SIZE}",
                    row + 1,
                    cells.len()
                );
            }
            values[row * BOARD_SIZE..(row + 1) * BOARD_SIZE].copy_from_slice(&cells);
            row_count += 1;
        }

        if row_count != BOARD_SIZE {
            bail!("board has {row_count} rows, expected {BOARD_SIZE}");
        }
        Ok(Self::new(values))
    }

    pub fn tiles(&self) -> &[Tile; TILE_COUNT] {
        &self.tiles
    }

    pub fn tile(&self, row: usize, col: usize) -> Tile {
        self.tiles[col + row * BOARD_SIZE]
    }

    pub fn has_win(&self) -> bool {
        self.has_win
    }

    /// Mark the first unmarked tile holding `number`.
    ///
    /// Returns whether a tile was marked. At most one tile changes per call.
    pub fn play(&mut self, number: i64) -> bool {
        match self
            .tiles
            .iter_mut()
            .find(|tile| tile.value == number && !tile.marked)
        {
            Some(tile) => {
                tile.marked = true;
                true
            }
            None => false,
        }
    }

    /// Whether any row or column is fully marked.
    ///
    /// Once a win has been seen it is cached and never re-evaluated.
    pub fn check_for_win(&mut self) -> bool {
        if self.has_win {
            return true;
        }

        let mut rows = [true; BOARD_SIZE];
        let mut cols = [true; BOARD_SIZE];
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let marked = self.tile(row, col).marked;
                rows[row] &= marked;
                cols[col] &= marked;
            }
        }

        self.has_win = rows.iter().chain(cols.iter()).any(|&complete| complete);
        self.has_win
    }

    /// Sum of the unmarked tiles times the number that was just drawn,
    /// `None` if that does not fit in an `i64`
    pub fn score(&self, last_number: i64) -> Option<i64> {
        self.tiles
            .iter()
            .filter(|tile| !tile.marked)
            .try_fold(0i64, |sum, tile| sum.checked_add(tile.value))?
            .checked_mul(last_number)
    }
}

/// A board reaching bingo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    /// Index of the board in input order
    pub board: usize,
    /// Position of the winning number in the draw sequence
    pub draw_index: usize,
    pub number: i64,
    pub score: i64,
}

/// First and last winners of a game; `None` when no board ever won
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BingoOutcome {
    pub first: Option<Win>,
    pub last: Option<Win>,
}

/// Play `draws` in order against every board that has not won yet.
///
/// All boards take the same number before the next one is drawn, so
/// boards winning on the same draw are reported in board order. The game
/// stops early once no board is left in play. Fails if a winning score
/// overflows.
pub fn simulate(draws: &[i64], boards: &mut [Board]) -> Result<BingoOutcome, BingoError> {
    let mut outcome = BingoOutcome::default();

    for (draw_index, &number) in draws.iter().enumerate() {
        let mut played = false;

        for (board_index, board) in boards.iter_mut().enumerate() {
            if board.has_win() {
                continue;
            }
            played = true;
            board.play(number);

            if board.check_for_win() {
                let score = board.score(number).ok_or(BingoError::ScoreOverflow {
                    board: board_index,
                    number,
                })?;
                let win = Win {
                    board: board_index,
                    draw_index,
                    number,
                    score,
                };
                debug!(board = board_index, number, score = win.score, "board won");
                outcome.first.get_or_insert(win);
                outcome.last = Some(win);
            }
        }

        if !played {
            break;
        }
    }

    Ok(outcome)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BingoError {
    #[error("no board won after {draws} draw(s) across {boards} board(s)")]
    NoWinner { draws: usize, boards: usize },
    #[error("score of board {board} overflows when it wins on {number}")]
    ScoreOverflow { board: usize, number: i64 },
}

#[derive(Debug)]
pub struct Bingo {
    draws: Vec<i64>,
    boards: Vec<Board>,
    outcome: Option<Result<BingoOutcome, BingoError>>,
}

impl Bingo {
    pub fn draws(&self) -> &[i64] {
        &self.draws
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Bingo;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::MissingData("input is empty".to_string()));
        }

        let mut lines = input.lines().enumerate();
        let draws = lines
            .next()
            .map(|(_, line)| parse_comma_separated::<i64>(line))
            .transpose()
            .map_err(|e| ParseError::InvalidFormat(format!("(line 1) {e}")))?
            .unwrap_or_default();

        let mut boards = Vec::new();
        let mut block: Vec<&str> = Vec::with_capacity(BOARD_SIZE);
        let mut block_start = 0;
        // A trailing empty line flushes the last block
        for (line_idx, line) in lines.chain(std::iter::once((usize::MAX, ""))) {
            if line.trim().is_empty() {
                if !block.is_empty() {
                    let board = Board::from_rows(block.drain(..)).map_err(|e| {
                        ParseError::InvalidFormat(format!(
                            "(board at line {}) {}",
                            block_start + 1,
                            e
                        ))
                    })?;
                    boards.push(board);
                }
            } else {
                if block.is_empty() {
                    block_start = line_idx;
                }
                block.push(line);
            }
        }

        Ok(Bingo {
            draws,
            boards,
            outcome: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        winner_score(shared, |outcome| outcome.first)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        winner_score(shared, |outcome| outcome.last)
    }
}

fn winner_score(
    shared: &mut Bingo,
    pick: impl FnOnce(&BingoOutcome) -> Option<Win>,
) -> Result<String, SolveError> {
    let outcome = *shared
        .outcome
        .get_or_insert_with(|| simulate(&shared.draws, &mut shared.boards));
    let outcome = outcome.map_err(SolveError::failed)?;

    pick(&outcome)
        .map(|win| win.score.to_string())
        .ok_or_else(|| {
            SolveError::failed(BingoError::NoWinner {
                draws: shared.draws.len(),
                boards: shared.boards.len(),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const EXAMPLE: &str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
";

    const FIRST_BOARD: [i64; 25] = [
        22, 13, 17, 11, 0, //
        8, 2, 23, 4, 24, //
        21, 9, 14, 16, 7, //
        6, 10, 3, 18, 5, //
        1, 12, 20, 15, 19,
    ];

    fn row_marked(board: &Board, row: usize) -> bool {
        (0..BOARD_SIZE).all(|col| board.tile(row, col).marked)
    }

    #[test]
    fn test_example_parts() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.draws().len(), 27);
        assert_eq!(shared.boards().len(), 3);

        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "4512");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1924");
    }

    #[test]
    fn test_example_winners() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        let outcome = simulate(&shared.draws, &mut shared.boards).unwrap();

        let first = outcome.first.unwrap();
        assert_eq!((first.board, first.number, first.draw_index), (2, 24, 11));
        assert_eq!(first.score, 188 * 24);

        let last = outcome.last.unwrap();
        assert_eq!((last.board, last.number), (1, 13));
        assert_eq!(last.score, 148 * 13);
    }

    #[test]
    fn test_single_board_never_completes_without_sixteen() {
        let mut boards = vec![Board::new(FIRST_BOARD)];
        let draws = [7, 4, 9, 5, 11, 17, 23, 2, 0, 14, 21, 24];

        let outcome = simulate(&draws, &mut boards).unwrap();
        assert_eq!(outcome, BingoOutcome::default());
        assert!(!boards[0].has_win());
        assert!(!row_marked(&boards[0], 2));
        assert!(!boards[0].tile(2, 3).marked);
    }

    #[test]
    fn test_single_board_wins_on_third_row() {
        let mut boards = vec![Board::new(FIRST_BOARD)];
        let draws = [7, 4, 9, 5, 11, 17, 23, 2, 0, 14, 21, 24, 16, 99];

        let outcome = simulate(&draws, &mut boards).unwrap();
        let win = outcome.first.unwrap();
        assert_eq!((win.number, win.draw_index), (16, 12));
        assert!(row_marked(&boards[0], 2));
        // 300 total, 153 marked
        assert_eq!(win.score, 147 * 16);
        assert_eq!(outcome.last, Some(win));
    }

    #[test]
    fn test_column_win() {
        let mut board = Board::new(FIRST_BOARD);
        for number in [11, 4, 16, 18] {
            board.play(number);
            assert!(!board.check_for_win());
        }
        board.play(15);
        assert!(board.check_for_win());
        assert_eq!(board.score(15), Some((300 - 11 - 4 - 16 - 18 - 15) * 15));
    }

    #[test]
    fn test_play_misses_leave_board_untouched() {
        let mut board = Board::new(FIRST_BOARD);
        let before = board.clone();
        assert!(!board.play(99));
        assert_eq!(board, before);
    }

    #[test]
    fn test_play_marks_first_unmarked_duplicate_only() {
        let mut values = FIRST_BOARD;
        values[24] = 22;
        let mut board = Board::new(values);

        assert!(board.play(22));
        assert!(board.tile(0, 0).marked);
        assert!(!board.tile(4, 4).marked);

        assert!(board.play(22));
        assert!(board.tile(4, 4).marked);

        assert!(!board.play(22));
    }

    #[test]
    fn test_check_for_win_idempotent_and_sticky() {
        let mut board = Board::new(FIRST_BOARD);
        for number in [22, 13, 17, 11] {
            board.play(number);
        }
        assert!(!board.check_for_win());
        assert!(!board.check_for_win());
        assert!(!board.has_win());

        board.play(0);
        assert!(board.check_for_win());
        assert!(board.check_for_win());
        board.play(8);
        assert!(board.check_for_win());
        assert!(board.has_win());
    }

    #[test]
    fn test_won_boards_are_frozen() {
        let mut boards = vec![Board::new(FIRST_BOARD), Board::new(FIRST_BOARD)];
        boards[1].play(1);
        let draws = [12, 20, 15, 19, 22, 13];

        // Board 1 already holds 1 and completes the bottom row on 19
        let outcome = simulate(&draws, &mut boards).unwrap();
        assert_eq!(outcome.first.unwrap().board, 1);
        assert!(!boards[1].tiles().iter().any(|t| t.value == 22 && t.marked));
        assert!(boards[0].tile(0, 0).marked);
        assert!(!boards[0].has_win());
        assert_eq!(outcome.last.unwrap().board, 1);
    }

    #[test]
    fn test_same_draw_winners_resolve_by_board_order() {
        let mut boards = vec![Board::new(FIRST_BOARD), Board::new(FIRST_BOARD)];
        let outcome = simulate(&[21, 9, 14, 16, 7], &mut boards).unwrap();

        assert_eq!(outcome.first.unwrap().board, 0);
        assert_eq!(outcome.last.unwrap().board, 1);
        assert_eq!(outcome.first.unwrap().score, outcome.last.unwrap().score);
    }

    #[test]
    fn test_no_boards_or_no_draws() {
        let mut shared = Solver::parse("1,2,3\n").unwrap();
        assert!(shared.boards().is_empty());
        let err = Solver::solve_part(&mut shared, 1).unwrap_err();
        assert!(err.to_string().contains("no board won"), "{err}");

        let input = format!("\n\n{}", EXAMPLE.split_once("\n\n").unwrap().1);
        let mut shared = Solver::parse(&input).unwrap();
        assert!(shared.draws().is_empty());
        assert_eq!(shared.boards().len(), 3);
        assert!(Solver::solve_part(&mut shared, 2).is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_boards() {
        let short_row = "1,2\n\n1 2 3 4 5\n1 2 3 4\n1 2 3 4 5\n1 2 3 4 5\n1 2 3 4 5\n";
        let bad_cell = "1,2\n\n1 2 3 4 5\n1 2 x 4 5\n1 2 3 4 5\n1 2 3 4 5\n1 2 3 4 5\n";
        let four_rows = "1,2\n\n1 2 3 4 5\n1 2 3 4 5\n1 2 3 4 5\n1 2 3 4 5\n";
        let six_rows = "1,2\n\n1 2 3 4 5\n1 2 3 4 5\n1 2 3 4 5\n1 2 3 4 5\n1 2 3 4 5\n1 2 3 4 5\n";
        let bad_draw = "1,two\n\n1 2 3 4 5\n1 2 3 4 5\n1 2 3 4 5\n1 2 3 4 5\n1 2 3 4 5\n";

        for input in [short_row, bad_cell, four_rows, six_rows, bad_draw] {
            assert!(
                matches!(Solver::parse(input), Err(ParseError::InvalidFormat(_))),
                "accepted {input:?}"
            );
        }
        assert!(matches!(Solver::parse(""), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn test_score_beyond_u32_range() {
        let values: [i64; 25] = std::array::from_fn(|i| 100_000 + i as i64);
        let mut board = Board::new(values);
        for number in 100_000..100_005 {
            board.play(number);
        }
        assert!(board.check_for_win());

        let unmarked: i64 = (100_005..100_025).sum();
        assert_eq!(unmarked, 2_000_290);
        let score = board.score(100_004).unwrap();
        assert_eq!(score, 200_037_001_160);
        assert!(score > i64::from(u32::MAX));
    }

    #[test]
    fn test_negative_numbers_play_and_score() {
        let input = "-3,4,-1,7,2\n\n\
            -3  4 -1  7  2\n\
            10 11 12 13 14\n\
            15 16 17 18 19\n\
            20 21 22 23 24\n\
            25 26 27 28 29\n";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(shared.draws(), &[-3, 4, -1, 7, 2]);
        assert_eq!(shared.boards()[0].tile(0, 0).value, -3);

        let unmarked: i64 = (10..30).sum();
        let expected = (unmarked * 2).to_string();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), expected);
    }

    #[test]
    fn test_score_overflow_is_a_solve_error() {
        let mut values = FIRST_BOARD;
        values[24] = i64::MAX;
        let mut boards = vec![Board::new(values)];

        let err = simulate(&[22, 13, 17, 11, 0], &mut boards).unwrap_err();
        assert_eq!(err, BingoError::ScoreOverflow { board: 0, number: 0 });

        let mut shared = Bingo {
            draws: vec![22, 13, 17, 11, 0],
            boards: vec![Board::new(values)],
            outcome: None,
        };
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    fn shuffled_board() -> impl Strategy<Value = [i64; 25]> {
        Just((0..25).collect::<Vec<i64>>())
            .prop_shuffle()
            .prop_map(|v| v.try_into().unwrap())
    }

    proptest! {
        #[test]
        fn prop_play_marks_at_most_one_matching_tile(
            values in shuffled_board(),
            number in 0i64..40,
        ) {
            let mut board = Board::new(values);
            let before = board.clone();
            let matched = board.play(number);

            let changed: Vec<usize> = (0..TILE_COUNT)
                .filter(|&i| before.tiles()[i] != board.tiles()[i])
                .collect();
            prop_assert_eq!(changed.len(), usize::from(matched));
            for i in changed {
                prop_assert_eq!(board.tiles()[i].value, number);
                prop_assert!(board.tiles()[i].marked);
            }
        }

        #[test]
        fn prop_win_is_monotonic_and_scored_at_winning_draw(
            values in shuffled_board(),
            draws in Just((0..25).collect::<Vec<i64>>()).prop_shuffle(),
        ) {
            let mut board = Board::new(values);
            let mut won_at = None;

            for (i, &number) in draws.iter().enumerate() {
                board.play(number);
                let won = board.check_for_win();
                if won_at.is_some() {
                    prop_assert!(won);
                } else if won {
                    won_at = Some(i);
                    let unmarked: i64 = draws[i + 1..].iter().sum();
                    prop_assert_eq!(board.score(number), Some(unmarked * number));
                }
            }

            // Every tile is drawn, so a win must happen by the 25th draw
            prop_assert!(won_at.is_some());
            prop_assert!(won_at.unwrap() >= BOARD_SIZE - 1);
        }
    }
}
