//! Static evaluation of Tablut positions
//!
//! Positions are scored from White's point of view. Decided games score
//! ±`WINNING_VALUE`; a king with a free run to the edge on White's turn
//! scores `WILL_WIN_VALUE`. Anything else gets a linear estimate based on:
//! - Material (defenders count double what attackers cost)
//! - How far the king is from the nearest edge
//! - Attackers crowding the king

use crate::board::{Board, Piece, Side, Square};
use crate::rules::king_can_escape;

use super::score::Score;

/// Evaluate the board for the minimax search.
///
/// Returns a score where:
/// - Positive values favour the defenders (White)
/// - Negative values favour the attackers (Black)
/// - `Score::WINNING_VALUE` means the king escaped or won by repetition
/// - `-Score::WINNING_VALUE` means the king was captured or Black won by repetition
#[must_use]
pub fn static_score(board: &Board) -> i32 {
    let Some(king) = board.king_position() else {
        return -Score::WINNING_VALUE;
    };
    if king.is_edge() {
        return Score::WINNING_VALUE;
    }

    if board.repeated_position() {
        match board.winner() {
            Some(Side::Defender) => return Score::WINNING_VALUE,
            Some(Side::Attacker) => return -Score::WINNING_VALUE,
            None => {}
        }
    }

    if king_can_escape(board) {
        return Score::WILL_WIN_VALUE;
    }

    let defenders = board.piece_locations(Piece::Defender).count() as i32;
    let attackers = board.piece_locations(Piece::Attacker).count() as i32;
    let (row_dist, col_dist) = king.edge_distance();

    Score::DEFENDER * defenders
        - Score::ATTACKER * attackers
        - Score::EDGE_DISTANCE * i32::from(row_dist.min(col_dist))
        - Score::KING_PRESSURE * king_pressure(board, king) / 2
}

/// Attackers around the king, counted in half-pieces: 2 for each orthogonal
/// neighbour, 1 for each diagonal beside the king's north and south
/// neighbours.
fn king_pressure(board: &Board, king: Square) -> i32 {
    let is_attacker = |sq: &Square| board.get(*sq) == Piece::Attacker;

    let orthogonal = (0..4)
        .filter_map(|dir| king.neighbour(dir))
        .filter(is_attacker)
        .count() as i32;

    let diagonal = [0, 2]
        .into_iter()
        .flat_map(|dir| king.diagonals(dir))
        .flatten()
        .filter(is_attacker)
        .count() as i32;

    2 * orthogonal + diagonal
}
