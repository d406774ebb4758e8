//! Precomputed peer table.
//!
//! Every cell has exactly 20 peers: the 8 other cells of its row, the
//! 8 other cells of its column, and the 4 remaining cells of its 3x3
//! box. The table is computed once at compile time and shared
//! read-only by every solver instance.

use crate::position::Position;

/// Returns the 20 peers of `pos`: the cells sharing its row, column,
/// or box, excluding `pos` itself.
///
/// # Examples
///
/// ```
/// use kudoku_core::{Position, peers_of};
///
/// let peers = peers_of(Position::new(4, 4));
/// assert_eq!(peers.len(), 20);
/// assert!(!peers.contains(&Position::new(4, 4)));
/// assert!(peers.contains(&Position::new(0, 4))); // same row
/// assert!(peers.contains(&Position::new(4, 0))); // same column
/// assert!(peers.contains(&Position::new(3, 3))); // same box
/// ```
#[must_use]
pub fn peers_of(pos: Position) -> &'static [Position; 20] {
    &PEER_TABLE[pos.cell_index()]
}

static PEER_TABLE: [[Position; 20]; 81] = build_peer_table();

const fn build_peer_table() -> [[Position; 20]; 81] {
    let mut table = [[Position::new(0, 0); 20]; 81];
    let mut y = 0;
    while y < 9 {
        let mut x = 0;
        while x < 9 {
            table[Position::new(x, y).cell_index()] = peers_at(x, y);
            x += 1;
        }
        y += 1;
    }
    table
}

const fn peers_at(x: u8, y: u8) -> [Position; 20] {
    let mut peers = [Position::new(0, 0); 20];
    let mut n = 0;
    let mut cx = 0;
    while cx < 9 {
        if cx != x {
            peers[n] = Position::new(cx, y);
            n += 1;
        }
        cx += 1;
    }
    let mut cy = 0;
    while cy < 9 {
        if cy != y {
            peers[n] = Position::new(x, cy);
            n += 1;
        }
        cy += 1;
    }
    // Box cells outside the row and column covered above.
    let bx = (x / 3) * 3;
    let by = (y / 3) * 3;
    let mut i = 0;
    while i < 9 {
        let px = bx + i % 3;
        let py = by + i / 3;
        if px != x && py != y {
            peers[n] = Position::new(px, py);
            n += 1;
        }
        i += 1;
    }
    assert!(n == 20);
    peers
}
