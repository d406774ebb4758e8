//! Core data structures for the Kudoku sudoku solver.
//!
//! This crate provides the fundamental types shared by the solver, the
//! puzzle loader, and the CLI.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: A bitmask set of digits, used both for candidate
//!   tracking and for duplicate detection
//! - [`position`]: Board position (x, y) coordinate type
//! - [`peers`]: The static peer table mapping each cell to the 20 cells
//!   sharing its row, column, or box
//! - [`grid`]: The 9x9 board of placed digits, with parsing, formatting,
//!   and validity checking
//!
//! # Examples
//!
//! ```
//! use kudoku_core::{Digit, DigitGrid, DigitSet, Position, peers_of};
//!
//! let grid: DigitGrid = "
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
//! assert!(grid.is_valid());
//!
//! // Digits placed on a cell's peers are ruled out as candidates.
//! let mut candidates = DigitSet::FULL;
//! for peer in peers_of(Position::new(2, 0)) {
//!     if let Some(digit) = grid.get(*peer) {
//!         candidates.remove(digit);
//!     }
//! }
//! assert!(!candidates.contains(Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod peers;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError},
    peers::peers_of,
    position::Position,
};
