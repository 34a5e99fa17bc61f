//! Legal move generation
//!
//! Pieces move like rooks through empty squares. Only the king may stop on
//! the throne, though other pieces may pass over it while it is empty.

use crate::board::{rook_moves, Board, Move, Piece, Side, Square, THRONE};

/// Return true iff `from`-`to` is a rook move and every square along it
/// other than `from` is empty.
pub fn is_unblocked_move(board: &Board, from: Square, to: Square) -> bool {
    let Some(dir) = from.direction(to) else {
        return false;
    };
    for mv in rook_moves(from, dir) {
        if board.get(mv.to()) != Piece::Empty {
            return false;
        }
        if mv.to() == to {
            break;
        }
    }
    true
}

/// Append the moves of the piece on `from` in fixed order: directions
/// north, east, south, west, nearer destinations first.
fn push_piece_moves(board: &Board, from: Square, moves: &mut Vec<Move>) {
    let is_king = board.get(from) == Piece::King;
    for dir in 0..4 {
        for &mv in rook_moves(from, dir) {
            if board.get(mv.to()) != Piece::Empty {
                break;
            }
            if mv.to() == THRONE && !is_king {
                continue;
            }
            moves.push(mv);
        }
    }
}

/// Return every legal move for `side`, regardless of whose turn it is.
///
/// Pieces are visited in square index order; for the defenders the king
/// comes last. The order is stable and the search relies on it to break ties.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::with_capacity(96);
    for sq in board.piece_locations(side.piece()).iter_ones() {
        push_piece_moves(board, sq, &mut moves);
    }
    if side == Side::Defender {
        if let Some(king) = board.king_position() {
            push_piece_moves(board, king, &mut moves);
        }
    }
    moves
}

/// Return true iff `side` has at least one legal move.
pub fn has_move(board: &Board, side: Side) -> bool {
    let can_move = |from: Square| {
        let is_king = board.get(from) == Piece::King;
        (0..4).any(|dir| {
            rook_moves(from, dir)
                .iter()
                .take_while(|mv| board.get(mv.to()) == Piece::Empty)
                .any(|mv| mv.to() != THRONE || is_king)
        })
    };
    if board.piece_locations(side.piece()).iter_ones().any(can_move) {
        return true;
    }
    side == Side::Defender && board.king_position().is_some_and(can_move)
}
