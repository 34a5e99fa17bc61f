//! Error types for the Tablut engine
//!
//! Illegal moves handed straight to [`Board::make_move`](crate::Board::make_move)
//! are contract violations and panic. Everything a user can get wrong from the
//! outside (square and move text, commands, move limits) is reported through
//! [`TablutError`] instead.

use thiserror::Error;

use crate::board::{Move, Side};

/// Errors that can occur while driving a game
#[derive(Error, Debug)]
pub enum TablutError {
    /// Square text that is not a column `a`-`i` followed by a row `1`-`9`
    #[error("invalid square: {text:?}")]
    InvalidSquare { text: String },

    /// Move text that does not describe a rook move
    #[error("invalid move: {text:?}")]
    InvalidMove { text: String },

    /// Well-formed move that is not legal in the current position
    #[error("illegal move: {mv}")]
    IllegalMove { mv: Move },

    /// Move limit already exhausted by the moves played so far
    #[error("move limit {limit} is too small: {moves} moves already played")]
    MoveLimit { limit: u32, moves: u32 },

    /// Move submitted after the game has been decided
    #[error("game is over")]
    GameOver,

    /// Engine asked to move for a side that has no legal move
    #[error("{side} has no legal move")]
    NoMove { side: Side },

    /// Input line that is neither a move nor a known command
    #[error("unknown command: {text:?}")]
    UnknownCommand { text: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine and driver operations
pub type Result<T> = std::result::Result<T, TablutError>;
