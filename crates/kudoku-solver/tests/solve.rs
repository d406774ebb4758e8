//! End-to-end solver tests.

use kudoku_core::{Digit, DigitGrid, Position};
use kudoku_solver::{SolveStats, solve};

const CLASSIC: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

const CLASSIC_SOLUTION: &str = "
    534 678 912
    672 195 348
    198 342 567
    859 761 423
    426 853 791
    713 924 856
    961 537 284
    287 419 635
    345 286 179
";

#[test]
fn test_classic_puzzle_solves_to_canonical_solution() {
    let mut grid: DigitGrid = CLASSIC.parse().unwrap();
    let outcome = solve(&mut grid);

    assert!(outcome.solved);
    assert!(outcome.grid.is_complete());
    assert!(outcome.grid.is_valid());
    assert_eq!(outcome.grid, CLASSIC_SOLUTION.parse().unwrap());
    assert_eq!(grid, outcome.grid);
}

#[test]
fn test_empty_board_solves_to_some_valid_grid() {
    let mut grid = DigitGrid::new();
    let outcome = solve(&mut grid);

    assert!(outcome.solved);
    assert!(outcome.grid.is_complete());
    assert!(outcome.grid.is_valid());
}

#[test]
fn test_already_complete_grid_needs_no_steps() {
    let mut grid: DigitGrid = CLASSIC_SOLUTION.parse().unwrap();
    let outcome = solve(&mut grid);

    assert!(outcome.solved);
    assert_eq!(outcome.grid, CLASSIC_SOLUTION.parse().unwrap());
    assert_eq!(outcome.stats.steps(), 0);
    assert_eq!(outcome.stats.recursive_calls(), 1);
    assert_eq!(outcome.stats.backtracks(), 0);
}

#[test]
fn test_duplicate_in_row_fails_without_searching() {
    let mut grid = DigitGrid::new();
    grid.set(Position::new(1, 2), Some(Digit::D5));
    grid.set(Position::new(6, 2), Some(Digit::D5));
    let before = grid;
    let outcome = solve(&mut grid);

    assert!(!outcome.solved);
    assert_eq!(outcome.grid, before);
    assert_eq!(grid, before);
    assert_eq!(outcome.stats, SolveStats::new());
}

#[test]
fn test_duplicate_in_column_fails_without_searching() {
    let mut grid = DigitGrid::new();
    grid.set(Position::new(4, 0), Some(Digit::D8));
    grid.set(Position::new(4, 7), Some(Digit::D8));
    let outcome = solve(&mut grid);

    assert!(!outcome.solved);
    assert_eq!(outcome.stats, SolveStats::new());
}

#[test]
fn test_duplicate_in_box_fails_without_searching() {
    let mut grid = DigitGrid::new();
    grid.set(Position::new(3, 3), Some(Digit::D2));
    grid.set(Position::new(5, 5), Some(Digit::D2));
    let outcome = solve(&mut grid);

    assert!(!outcome.solved);
    assert_eq!(outcome.stats, SolveStats::new());
}

#[test]
fn test_repeated_solves_are_deterministic() {
    let run = || {
        let mut grid: DigitGrid = CLASSIC.parse().unwrap();
        solve(&mut grid)
    };
    let first = run();
    let second = run();

    assert_eq!(first.solved, second.solved);
    assert_eq!(first.grid, second.grid);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_unsolvable_but_duplicate_free_puzzle_fails() {
    // No duplicates anywhere, but (0, 0) sees all nine digits: 1-3 in
    // its row, 4-6 in its column, 7-9 in its box.
    let mut grid: DigitGrid = "
        ___ 123 ___
        _78 ___ ___
        _9_ ___ ___
        4__ ___ ___
        5__ ___ ___
        6__ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
    "
    .parse()
    .unwrap();
    assert!(grid.is_valid());
    let before = grid;
    let outcome = solve(&mut grid);

    assert!(!outcome.solved);
    assert_eq!(grid, before);
}
