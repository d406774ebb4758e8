//! Backtracking sudoku solver with candidate propagation.
//!
//! The solver keeps a [`CandidateGrid`] of remaining digits per cell,
//! fills naked singles, and otherwise branches on the empty cell with
//! the fewest candidates, forward-checking each guess against its
//! peers. Only naked-single propagation is implemented; stronger
//! techniques would change which puzzles the search has to guess on
//! and make the counters incomparable across runs.
//!
//! # Examples
//!
//! ```
//! use kudoku_core::DigitGrid;
//! use kudoku_solver::solve;
//!
//! let mut grid: DigitGrid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()
//! .unwrap();
//!
//! let outcome = solve(&mut grid);
//! assert!(outcome.solved);
//! assert!(outcome.grid.is_complete());
//! ```

pub mod candidate_grid;
pub mod search;
pub mod stats;

use std::time::{Duration, Instant};

use kudoku_core::DigitGrid;

pub use self::{candidate_grid::CandidateGrid, stats::SolveStats};

/// Result of a [`solve`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOutcome {
    /// Whether a complete solution was found.
    pub solved: bool,
    /// The board after solving: the solution on success, the last
    /// attempted state otherwise.
    pub grid: DigitGrid,
    /// Wall-clock time the solve took.
    pub elapsed: Duration,
    /// Work counters for the solve.
    pub stats: SolveStats,
}

/// Solves `grid` in place and reports the outcome.
///
/// An invalid board (a duplicate digit in a row, column, or box) is
/// rejected without searching, leaving the grid untouched and the
/// counters at zero. Otherwise the candidate sets are built and
/// tightened, then the backtracking search runs to completion. The
/// same input always produces the same board and the same counters.
#[must_use]
pub fn solve(grid: &mut DigitGrid) -> SolveOutcome {
    let start = Instant::now();
    let mut stats = SolveStats::new();

    let solved = if grid.is_valid() {
        let mut candidates = CandidateGrid::from_grid(grid);
        candidates.propagate();
        search::solve_backtrack(grid, &mut candidates, Some(&mut stats))
    } else {
        false
    };

    SolveOutcome {
        solved,
        grid: *grid,
        elapsed: start.elapsed(),
        stats,
    }
}
