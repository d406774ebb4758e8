//! The 9x9 digit grid.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// A 9x9 sudoku board.
///
/// Each cell holds an `Option<Digit>`, `None` meaning empty. The grid
/// is a fixed-size `Copy` value, so taking a snapshot before a
/// speculative solve is a plain assignment.
///
/// # Examples
///
/// ```
/// use kudoku_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert!(!grid.is_complete());
/// assert!(grid.is_valid());
/// ```
///
/// Grids parse from the usual text form (digits fill cells; `.`, `_`,
/// or `0` leave them empty; whitespace is ignored):
///
/// ```
/// use kudoku_core::DigitGrid;
///
/// let grid: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
/// assert!(grid.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.cell_index()]
    }

    /// Sets or clears the cell at `pos`.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.cell_index()] = digit;
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns an iterator over the positions of all empty cells, in
    /// row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|pos| self.get(*pos).is_none())
    }

    /// Returns `true` if no row, column, or box contains the same
    /// digit twice.
    ///
    /// Empty cells are skipped; a grid full of holes is valid. Rows
    /// are scanned first, then columns, then boxes, stopping at the
    /// first duplicate found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        for y in 0..9 {
            if self.has_duplicate((0..9).map(|x| Position::new(x, y))) {
                return false;
            }
        }
        for x in 0..9 {
            if self.has_duplicate((0..9).map(|y| Position::new(x, y))) {
                return false;
            }
        }
        for b in 0..9 {
            if self.has_duplicate((0..9).map(|i| Position::from_box(b, i))) {
                return false;
            }
        }
        true
    }

    fn has_duplicate(&self, house: impl Iterator<Item = Position>) -> bool {
        let mut seen = DigitSet::new();
        for pos in house {
            if let Some(digit) = self.get(pos) {
                if seen.contains(digit) {
                    return true;
                }
                seen.insert(digit);
            }
        }
        false
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for DigitGrid {
    /// Formats the grid as 9 lines of space-separated cells, `.` for
    /// empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            for x in 0..9 {
                if x > 0 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(x, y)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Error returned when parsing a grid from text fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character other than a digit, empty marker, or whitespace.
    #[display("invalid character {c:?} in grid")]
    InvalidCharacter {
        /// The offending character.
        #[error(not(source))]
        c: char,
    },
    /// The text did not contain exactly 81 cells.
    #[display("expected 81 cells, found {found}")]
    WrongCellCount {
        /// Number of cells found.
        #[error(not(source))]
        found: usize,
    },
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    /// Parses a grid from text. Digits 1-9 fill cells; `.`, `_`, and
    /// `0` leave them empty; whitespace is ignored. Exactly 81 cells
    /// are expected, in row-major order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut positions = Position::all();
        let mut count = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let digit = match c {
                '.' | '_' | '0' => None,
                '1'..='9' => Digit::new(c as u8 - b'0'),
                _ => return Err(ParseGridError::InvalidCharacter { c }),
            };
            match positions.next() {
                Some(pos) => grid.set(pos, digit),
                None => return Err(ParseGridError::WrongCellCount { found: count + 1 }),
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { found: count });
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

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

    #[test]
    fn test_parse_classic_puzzle() {
        let grid: DigitGrid = CLASSIC.parse().unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(grid.get(Position::new(1, 0)), Some(Digit::D3));
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::new(8, 8)), Some(Digit::D9));
        assert_eq!(grid.empty_positions().count(), 51);
    }

    #[test]
    fn test_parse_accepts_all_empty_markers() {
        let dots: DigitGrid = ".".repeat(81).parse().unwrap();
        let zeros: DigitGrid = "0".repeat(81).parse().unwrap();
        let underscores: DigitGrid = "_".repeat(81).parse().unwrap();
        assert_eq!(dots, DigitGrid::new());
        assert_eq!(zeros, DigitGrid::new());
        assert_eq!(underscores, DigitGrid::new());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "x".repeat(81).parse::<DigitGrid>(),
            Err(ParseGridError::InvalidCharacter { c: 'x' })
        );
        assert_eq!(
            ".".repeat(80).parse::<DigitGrid>(),
            Err(ParseGridError::WrongCellCount { found: 80 })
        );
        assert_eq!(
            ".".repeat(82).parse::<DigitGrid>(),
            Err(ParseGridError::WrongCellCount { found: 82 })
        );
    }

    #[test]
    fn test_is_valid_detects_row_duplicate() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 3), Some(Digit::D5));
        grid.set(Position::new(7, 3), Some(Digit::D5));
        assert!(!grid.is_valid());
    }

    #[test]
    fn test_is_valid_detects_column_duplicate() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(2, 0), Some(Digit::D9));
        grid.set(Position::new(2, 8), Some(Digit::D9));
        assert!(!grid.is_valid());
    }

    #[test]
    fn test_is_valid_detects_box_duplicate() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 0), Some(Digit::D1));
        grid.set(Position::new(1, 1), Some(Digit::D1));
        assert!(!grid.is_valid());
    }

    #[test]
    fn test_is_valid_ignores_empty_cells() {
        assert!(DigitGrid::new().is_valid());
        let grid: DigitGrid = CLASSIC.parse().unwrap();
        assert!(grid.is_valid());
    }

    #[test]
    fn test_display_uses_dots_for_empty() {
        let grid: DigitGrid = CLASSIC.parse().unwrap();
        let text = grid.to_string();
        let first_line = text.lines().next().unwrap();
        assert_eq!(first_line, "5 3 . . 7 . . . .");
        assert_eq!(text.lines().count(), 9);
    }

    fn arb_grid() -> impl Strategy<Value = DigitGrid> {
        prop::collection::vec(0u8..=9, 81).prop_map(|cells| {
            let mut grid = DigitGrid::new();
            for (pos, value) in Position::all().zip(cells) {
                grid.set(pos, Digit::new(value));
            }
            grid
        })
    }

    proptest! {
        #[test]
        fn prop_display_parse_round_trip(grid in arb_grid()) {
            let parsed: DigitGrid = grid.to_string().parse().unwrap();
            prop_assert_eq!(parsed, grid);
        }
    }
}
