use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of columns on the isolation board
pub const BOARD_WIDTH: usize = 11;

/// Number of rows on the isolation board
pub const BOARD_HEIGHT: usize = 9;

/// Total number of cells (fits in a u128 bitboard)
pub const CELL_COUNT: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// A board coordinate.
///
/// Cells are plain coordinates and carry no board size; the reference
/// [`Board`](super::Board) maps them to bit indices as `row * BOARD_WIDTH + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Bit index on the reference board, or None if off the 11x9 grid
    #[inline]
    pub fn index(self) -> Option<usize> {
        let (row, col) = (self.row as usize, self.col as usize);
        if row < BOARD_HEIGHT && col < BOARD_WIDTH {
            Some(row * BOARD_WIDTH + col)
        } else {
            None
        }
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < CELL_COUNT);
        Self {
            row: (idx / BOARD_WIDTH) as u8,
            col: (idx % BOARD_WIDTH) as u8,
        }
    }

    /// Offset by a (row, col) delta; None if the result would be negative
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if row < 0 || col < 0 || row > u8::MAX as i16 || col > u8::MAX as i16 {
            return None;
        }
        Some(Self::new(row as u8, col as u8))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
