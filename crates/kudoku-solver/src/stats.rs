//! Solve instrumentation counters.

/// Counters describing the work a solve performed.
///
/// Passed to the search as `Option<&mut SolveStats>`; passing `None`
/// skips all counting. Counting never affects solver behavior, so two
/// runs of the same puzzle with and without stats produce the same
/// board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    steps: u64,
    recursive_calls: u64,
    backtracks: u64,
}

impl SolveStats {
    /// Creates zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            steps: 0,
            recursive_calls: 0,
            backtracks: 0,
        }
    }

    /// Number of digit placements, deterministic fills and guesses
    /// both included.
    #[must_use]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Number of recursive search calls.
    #[must_use]
    pub const fn recursive_calls(&self) -> u64 {
        self.recursive_calls
    }

    /// Number of guesses abandoned after a failed recursive call.
    /// Guesses pruned by forward checking before recursing are not
    /// counted.
    #[must_use]
    pub const fn backtracks(&self) -> u64 {
        self.backtracks
    }

    pub(crate) const fn count_step(&mut self) {
        self.steps += 1;
    }

    pub(crate) const fn count_call(&mut self) {
        self.recursive_calls += 1;
    }

    pub(crate) const fn count_backtrack(&mut self) {
        self.backtracks += 1;
    }
}
