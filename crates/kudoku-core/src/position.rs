//! Board position (x, y) coordinate type.

use std::fmt::{self, Display};

/// A cell position on the 9x9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top
/// to bottom). Positions order and iterate row-major: all of row 0
/// left to right, then row 1, and so on.
///
/// # Examples
///
/// ```
/// use kudoku_core::Position;
///
/// let pos = Position::new(4, 4);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 4);
/// assert_eq!(pos.box_index(), 4); // center box
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    y: u8,
    x: u8,
}

impl Position {
    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is 9 or greater.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "position out of range");
        Self { y, x }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index of the containing 3x3 box (0-8, left to
    /// right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Converts a box index and a cell index within that box (both 0-8)
    /// into an absolute position.
    ///
    /// # Panics
    ///
    /// Panics if either index is 9 or greater.
    #[must_use]
    pub const fn from_box(box_index: u8, i: u8) -> Self {
        assert!(box_index < 9 && i < 9);
        let x = (box_index % 3) * 3 + i % 3;
        let y = (box_index / 3) * 3 + i / 3;
        Self { y, x }
    }

    /// Returns the row-major cell index (0-80) of this position.
    #[must_use]
    pub const fn cell_index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns an iterator over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).flat_map(|y| (0..9).map(move |x| Self::new(x, y)))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let pos = Position::new(3, 7);
        assert_eq!(pos.x(), 3);
        assert_eq!(pos.y(), 7);
        assert_eq!(pos.cell_index(), 7 * 9 + 3);
    }

    #[test]
    #[should_panic(expected = "position out of range")]
    fn test_new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(8, 0).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(0, 8).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_from_box_round_trip() {
        for pos in Position::all() {
            let b = pos.box_index();
            let i = (pos.y() % 3) * 3 + pos.x() % 3;
            assert_eq!(Position::from_box(b, i), pos);
        }
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), 81);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[1], Position::new(1, 0));
        assert_eq!(all[9], Position::new(0, 1));
        assert_eq!(all[80], Position::new(8, 8));
        // Ord agrees with the iteration order.
        assert!(all.is_sorted());
    }
}
