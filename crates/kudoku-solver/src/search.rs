//! The backtracking search.

use kudoku_core::{DigitGrid, DigitSet, Position};

use crate::{candidate_grid::CandidateGrid, stats::SolveStats};

/// Places every naked single until none remain.
///
/// Each pass scans all cells in row-major order, assigning any empty
/// cell whose candidate set has exactly one member and forward-checking
/// the placement. Passes repeat until one places nothing. Returns
/// `false` as soon as a placement empties a peer's candidate set, or
/// when the final scan finds an empty cell with no candidates left.
///
/// Calling this again once it has quiesced places nothing and succeeds.
pub fn fill_singles(
    grid: &mut DigitGrid,
    candidates: &mut CandidateGrid,
    mut stats: Option<&mut SolveStats>,
) -> bool {
    loop {
        let mut placed = false;
        for pos in Position::all() {
            if grid.get(pos).is_some() {
                continue;
            }
            let Some(digit) = candidates.get(pos).as_single() else {
                continue;
            };
            grid.set(pos, Some(digit));
            if let Some(stats) = stats.as_deref_mut() {
                stats.count_step();
            }
            if !candidates.eliminate_from_peers(grid, pos, digit) {
                return false;
            }
            placed = true;
        }
        if !placed {
            break;
        }
    }
    // A cell can run out of candidates without ever being the cell
    // that triggered an elimination, so sweep once more.
    grid.empty_positions()
        .all(|pos| !candidates.get(pos).is_empty())
}

/// Chooses the empty cell to branch on: minimum remaining values, ties
/// broken by first found in row-major order. Returns `None` when the
/// board has no empty cell.
#[must_use]
pub fn select_branch_cell(grid: &DigitGrid, candidates: &CandidateGrid) -> Option<Position> {
    let mut best: Option<(Position, usize)> = None;
    for pos in grid.empty_positions() {
        let len = candidates.get(pos).len();
        if best.is_none_or(|(_, best_len)| len < best_len) {
            best = Some((pos, len));
        }
    }
    best.map(|(pos, _)| pos)
}

/// The recursive search core. Returns `true` when `grid` has been
/// driven to a complete solution, `false` when the current partial
/// assignment is a dead end.
///
/// Each guess is tried on copies of the board and candidate grid, so a
/// failed branch leaves the caller's state untouched. A successful
/// branch is copied back and the remaining candidates are not tried.
pub fn solve_backtrack(
    grid: &mut DigitGrid,
    candidates: &mut CandidateGrid,
    mut stats: Option<&mut SolveStats>,
) -> bool {
    if let Some(stats) = stats.as_deref_mut() {
        stats.count_call();
    }
    if !fill_singles(grid, candidates, stats.as_deref_mut()) {
        return false;
    }
    if grid.is_complete() {
        return true;
    }
    let Some(cell) = select_branch_cell(grid, candidates) else {
        debug_assert!(
            grid.is_complete(),
            "no branch cell while empty cells remain"
        );
        return true;
    };
    let choices = candidates.get(cell);
    if choices.is_empty() {
        return false;
    }
    for digit in choices {
        let mut grid_branch = *grid;
        let mut cand_branch = *candidates;
        grid_branch.set(cell, Some(digit));
        cand_branch.set(cell, DigitSet::from_elem(digit));
        if let Some(stats) = stats.as_deref_mut() {
            stats.count_step();
        }
        if !cand_branch.eliminate_from_peers(&grid_branch, cell, digit) {
            // Pruned before recursing; not counted as a backtrack.
            continue;
        }
        if solve_backtrack(&mut grid_branch, &mut cand_branch, stats.as_deref_mut()) {
            *grid = grid_branch;
            return true;
        }
        if let Some(stats) = stats.as_deref_mut() {
            stats.count_backtrack();
        }
    }
    false
}
