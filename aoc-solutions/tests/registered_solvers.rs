//! Runs every 2021 solver through the plugin registry on the published examples

use aoc_solver::{SolveError, SolverError, SolverRegistry, SolverRegistryBuilder};
use aoc_solutions::year_2021;

const DAY_1: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";
const DAY_2: &str = "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n";
const DAY_3: &str =
    "00100\n11110\n10110\n10111\n10101\n01111\n00111\n11100\n10000\n11001\n00010\n01010\n";
const DAY_4: &str = "\
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
const DAY_5: &str = "0,9 -> 5,9\n8,0 -> 0,8\n9,4 -> 3,4\n2,2 -> 2,1\n7,0 -> 7,4\n\
6,4 -> 2,0\n0,9 -> 2,9\n3,4 -> 1,4\n0,0 -> 8,8\n5,5 -> 8,2\n";
const DAY_6: &str = "3,4,3,1,2\n";
const DAY_7: &str = "16,1,2,0,4,2,7,1,2,14\n";

fn registry_2021() -> SolverRegistry {
    // Keep the solutions crate linked so its plugins are collected
    let _ = std::any::type_name::<year_2021::day_4::Solver>();

    SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2021)
        .unwrap()
        .build()
}

fn answers(registry: &SolverRegistry, day: u8, input: &str) -> Vec<String> {
    let mut solver = registry.create_solver(2021, day, input).unwrap();
    (1..=solver.parts())
        .map(|part| solver.solve(part).unwrap().answer)
        .collect()
}

#[test]
fn test_all_days_registered() {
    let registry = registry_2021();
    let days: Vec<u8> = registry.storage().iter_info().map(|i| i.day).collect();
    assert_eq!(days, (1..=7).collect::<Vec<_>>());
    assert!(registry.storage().iter_info().all(|i| i.parts == 2));
}

#[test]
fn test_examples() {
    let registry = registry_2021();
    let cases = [
        (1, DAY_1, ["7", "5"]),
        (2, DAY_2, ["150", "900"]),
        (3, DAY_3, ["198", "230"]),
        (4, DAY_4, ["4512", "1924"]),
        (5, DAY_5, ["5", "12"]),
        (6, DAY_6, ["5934", "26984457539"]),
        (7, DAY_7, ["37", "168"]),
    ];

    for (day, input, expected) in cases {
        assert_eq!(answers(&registry, day, input), expected, "day {day}");
    }
}

#[test]
fn test_tag_filter() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"simulation"))
        .unwrap()
        .build();

    let days: Vec<u8> = registry.storage().iter_info().map(|i| i.day).collect();
    assert_eq!(days, vec![4, 6]);
}

#[test]
fn test_bingo_without_winner_fails_both_parts() {
    let registry = registry_2021();
    let input = "99,98\n\n1 2 3 4 5\n6 7 8 9 10\n11 12 13 14 15\n16 17 18 19 20\n21 22 23 24 25\n";
    let mut solver = registry.create_solver(2021, 4, input).unwrap();

    for part in 1..=2 {
        assert!(matches!(solver.solve(part), Err(SolveError::SolveFailed(_))));
    }
}

#[test]
fn test_malformed_bingo_board_is_a_parse_error() {
    let registry = registry_2021();
    let input = "1,2\n\n1 2 3 4 5\n6 7 8 9\n";
    assert!(matches!(
        registry.create_solver(2021, 4, input),
        Err(SolverError::ParseError(_))
    ));
}
