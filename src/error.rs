//! Error types for the isolation engine
//!
//! Only recoverable failures live here: reading and validating opening
//! books and hand-built positions. Handing a finished game to the search
//! is a caller bug and panics instead.

use crate::game_repr::Cell;
use thiserror::Error;

/// Errors that can occur outside the search itself
#[derive(Error, Debug)]
pub enum EngineError {
    /// Reading or writing an opening book failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Opening book is not valid JSON or has the wrong shape
    #[error("Malformed opening book: {0}")]
    Json(#[from] serde_json::Error),

    /// Cell outside the board
    #[error("Cell {cell} is off the {width}x{height} board")]
    InvalidCell { cell: Cell, width: usize, height: usize },

    /// Position violates the board rules
    #[error("Invalid position: {message}")]
    InvalidPosition { message: String },

    /// Opening book recommends a move that is not legal where it is stored
    #[error("Book move {action} is not legal at ply {ply}")]
    IllegalBookMove { action: Cell, ply: u32 },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// The receiving end of a move sink has gone away
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("move receiver disconnected")]
pub struct SinkClosed;
