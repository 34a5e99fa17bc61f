//! Tablut rules engine and AI player
//!
//! An engine for Tablut, the 9x9 Tafl game:
//! - Attackers (Black, 16 pieces) move first and try to capture the king
//! - Defenders (White, 8 pieces and the king) try to get the king to any edge
//! - All pieces move like rooks; only the king may stop on the throne
//! - Custodian capture, with extra protection for the king on or beside the throne
//! - A repeated position or an exhausted move limit also ends the game
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Squares, moves and the reversible board state
//! - [`rules`]: Move generation, capture and end-of-game rules
//! - [`eval`]: Static position evaluation
//! - [`search`]: Minimax search with alpha-beta pruning
//! - [`engine`]: Main AI engine integrating search and depth selection
//! - [`game`]: Text driver with human and engine players
//!
//! # Quick Start
//!
//! ```
//! use tablut::{AIEngine, Board, Side};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_depth(1);
//!
//! // Black opens, White answers
//! board.make_move("h5-6".parse().unwrap());
//! if let Some(mv) = engine.choose_move(&board) {
//!     board.make_move(mv);
//!     println!("White plays {mv}");
//! }
//! assert_eq!(board.turn(), Side::Attacker);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Piece, Side, Square, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult};
pub use error::{Result, TablutError};
