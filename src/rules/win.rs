//! Game-ending conditions for Tablut
//!
//! The game ends when:
//! 1. The king reaches any edge square (defenders win)
//! 2. The king is captured (attackers win, see [`capture`](super::capture))
//! 3. The side due to move next has no legal move (the side that just moved wins)
//! 4. A position repeats (the side to move in the repeated position wins)
//! 5. A side moves once the move limit is used up (that side loses)

use crate::board::{Board, Piece, Side, Square};

use super::movegen::has_move;

/// True once both sides have used up their move allowance
#[inline]
pub fn move_limit_reached(board: &Board) -> bool {
    u64::from(board.move_count()) >= 2 * u64::from(board.move_limit())
}

/// True if `piece` arriving on `to` is the king escaping
#[inline]
pub fn is_king_escape(piece: Piece, to: Square) -> bool {
    piece == Piece::King && to.is_edge()
}

/// Side to move after `mover` has played, or `None` when the opponent has
/// no legal move and the game is over.
pub fn following_turn(board: &Board, mover: Side) -> Option<Side> {
    let next = mover.opponent();
    has_move(board, next).then_some(next)
}

/// True if the king could step straight to an edge square on this turn.
pub fn king_can_escape(board: &Board) -> bool {
    let Some(king) = board.king_position() else {
        return false;
    };
    (0..4).any(|dir| {
        (1..)
            .map_while(|steps| king.rook_move(dir, steps))
            .last()
            .is_some_and(|edge| board.is_legal(king, edge))
    })
}
