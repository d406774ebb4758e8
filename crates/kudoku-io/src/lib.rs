//! Puzzle file loading for the Kudoku sudoku solver.
//!
//! Puzzles are plain text, one row per line, nine rows of nine cells.
//! Files ending in `.csv` are read as comma-separated cells; anything
//! else is read as digit runs, compact (`530070000`) or separated by
//! whitespace. In every format `0`, `.`, and an empty field mean an
//! empty cell, and blank lines are skipped.
//!
//! # Examples
//!
//! ```
//! use kudoku_core::{Digit, Position};
//! use kudoku_io::parse_text;
//!
//! let grid = parse_text(
//!     "530070000\n\
//!      600195000\n\
//!      098000060\n\
//!      800060003\n\
//!      400803001\n\
//!      700020006\n\
//!      060000280\n\
//!      000419005\n\
//!      000080079\n",
//! )
//! .unwrap();
//! assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
//! ```

use std::{fs, io, path::Path};

use kudoku_core::{Digit, DigitGrid, Position};

/// Error returned when a puzzle file cannot be loaded.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LoadError {
    /// The file could not be read.
    #[display("failed to read puzzle: {_0}")]
    Io(#[from] io::Error),
    /// The file did not contain exactly 9 rows.
    #[display("expected 9 rows, found {rows}")]
    WrongShape {
        /// Number of non-blank rows found.
        #[error(not(source))]
        rows: usize,
    },
    /// A row did not contain the expected 9 cells.
    #[display("row {row}: expected 9 cells, found {cells}")]
    WrongRowLength {
        /// 1-based row number.
        row: usize,
        /// Number of cells found.
        cells: usize,
    },
    /// A cell held something other than a digit or an empty marker.
    #[display("row {row}: invalid cell {token:?}")]
    BadCell {
        /// 1-based row number.
        row: usize,
        /// The offending cell text.
        token: String,
    },
}

/// Loads a puzzle from `path`, dispatching on the file extension:
/// `.csv` is treated as comma-separated, everything else as digit
/// runs.
///
/// # Errors
///
/// Returns a [`LoadError`] when the file cannot be read or does not
/// hold a well-formed 9x9 grid.
pub fn read_grid(path: impl AsRef<Path>) -> Result<DigitGrid, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        parse_csv(&text)
    } else {
        parse_text(&text)
    }
}

/// Parses comma-separated puzzle text. Each non-blank line must hold
/// at least 9 fields; only the first 9 are read, so trailing commas
/// and extra columns are ignored. Fields are trimmed, and `""`, `"0"`,
/// and `"."` mean an empty cell.
///
/// # Errors
///
/// Returns a [`LoadError`] when the text does not hold a well-formed
/// 9x9 grid.
pub fn parse_csv(text: &str) -> Result<DigitGrid, LoadError> {
    let mut rows = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let row = rows.len() + 1;
        let mut cells = Vec::new();
        for field in line.split(',').take(9) {
            cells.push(parse_cell(field.trim(), row)?);
        }
        if cells.len() < 9 {
            return Err(LoadError::WrongRowLength {
                row,
                cells: cells.len(),
            });
        }
        rows.push(cells);
    }
    grid_from_rows(&rows)
}

/// Parses digit-run puzzle text. Whitespace within a line is ignored,
/// so `530070000` and `5 3 0 0 7 0 0 0 0` read the same; `.` and `_`
/// also mean an empty cell.
///
/// # Errors
///
/// Returns a [`LoadError`] when the text does not hold a well-formed
/// 9x9 grid.
pub fn parse_text(text: &str) -> Result<DigitGrid, LoadError> {
    let mut rows = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let row = rows.len() + 1;
        let mut cells = Vec::new();
        for c in line.chars() {
            if c.is_whitespace() {
                continue;
            }
            cells.push(parse_cell(&c.to_string(), row)?);
        }
        if cells.len() != 9 {
            return Err(LoadError::WrongRowLength {
                row,
                cells: cells.len(),
            });
        }
        rows.push(cells);
    }
    grid_from_rows(&rows)
}

fn parse_cell(token: &str, row: usize) -> Result<Option<Digit>, LoadError> {
    match token {
        "" | "0" | "." | "_" => Ok(None),
        _ => match token.parse::<u8>().ok().and_then(Digit::new) {
            Some(digit) => Ok(Some(digit)),
            None => Err(LoadError::BadCell {
                row,
                token: token.to_owned(),
            }),
        },
    }
}

fn grid_from_rows(rows: &[Vec<Option<Digit>>]) -> Result<DigitGrid, LoadError> {
    if rows.len() != 9 {
        return Err(LoadError::WrongShape { rows: rows.len() });
    }
    let mut grid = DigitGrid::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let pos = Position::new(x as u8, y as u8);
            grid.set(pos, *cell);
        }
    }
    Ok(grid)
}
