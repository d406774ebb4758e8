//! Per-cell candidate tracking.

use kudoku_core::{Digit, DigitGrid, DigitSet, Position, peers_of};

/// Candidate sets for all 81 cells.
///
/// Like [`DigitGrid`], this is a fixed-size `Copy` value, so branching
/// in the search takes a snapshot with a plain assignment.
///
/// # Examples
///
/// ```
/// use kudoku_core::{Digit, DigitGrid, Position};
/// use kudoku_solver::CandidateGrid;
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Some(Digit::D5));
/// let mut candidates = CandidateGrid::from_grid(&grid);
/// candidates.propagate();
/// assert!(!candidates.get(Position::new(8, 0)).contains(Digit::D5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateGrid {
    cells: [DigitSet; 81],
}

impl CandidateGrid {
    /// Builds the initial candidate sets for `grid`: a singleton for
    /// each filled cell, the full set for each empty cell.
    #[must_use]
    pub fn from_grid(grid: &DigitGrid) -> Self {
        let mut cells = [DigitSet::FULL; 81];
        for pos in Position::all() {
            if let Some(digit) = grid.get(pos) {
                cells[pos.cell_index()] = DigitSet::from_elem(digit);
            }
        }
        Self { cells }
    }

    /// Returns the candidate set for `pos`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> DigitSet {
        self.cells[pos.cell_index()]
    }

    /// Replaces the candidate set for `pos`.
    pub const fn set(&mut self, pos: Position, candidates: DigitSet) {
        self.cells[pos.cell_index()] = candidates;
    }

    /// Tightens candidate sets to a fixed point.
    ///
    /// For every cell whose set is a singleton, the digit is removed
    /// from each peer whose set still has more than one member. Passes
    /// repeat until one makes no change. This only narrows sets; it
    /// never places digits on the board and never fails, so an emptied
    /// set is left for the search to detect.
    pub fn propagate(&mut self) {
        loop {
            let mut changed = false;
            for pos in Position::all() {
                let Some(digit) = self.get(pos).as_single() else {
                    continue;
                };
                for peer in peers_of(pos) {
                    let set = self.get(*peer);
                    if set.len() > 1 && set.contains(digit) {
                        self.cells[peer.cell_index()].remove(digit);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
    }

    /// Removes `digit` from the candidate sets of all peers of `pos`.
    ///
    /// This is the forward-checking primitive: if a peer that is still
    /// empty on `grid` is left with no candidates, the removal stops
    /// and `false` is returned to signal a contradiction.
    #[must_use]
    pub fn eliminate_from_peers(
        &mut self,
        grid: &DigitGrid,
        pos: Position,
        digit: Digit,
    ) -> bool {
        for peer in peers_of(pos) {
            if self.cells[peer.cell_index()].remove(digit)
                && grid.get(*peer).is_none()
                && self.cells[peer.cell_index()].is_empty()
            {
                return false;
            }
        }
        true
    }
}
