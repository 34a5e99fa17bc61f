//! Game rules for 9x9 Tablut
//!
//! This module implements the rule set used by [`Board`](crate::Board):
//! - Move generation (rook moves, throne restriction)
//! - Custodian capture, including the king's throne protections
//! - End-of-game conditions (escape, capture, stalemate, repetition, move limit)

pub mod capture;
pub mod movegen;
pub mod win;

// Re-exports for convenient access
pub use capture::{attackers_around_throne, hostile_around_king, resolve_captures};
pub use movegen::{has_move, is_unblocked_move, legal_moves};
pub use win::{following_turn, is_king_escape, king_can_escape, move_limit_reached};
