//! Custodian capture rules for Tablut
//!
//! A piece is captured when the mover lands on one side of it and the
//! square beyond (the flank) is hostile: a friendly piece, or the empty
//! throne. The king is harder to take near the throne:
//! - on the throne, all four throne neighbours must hold attackers;
//! - beside the throne, all four of its neighbours must be hostile, the
//!   throne itself counting as hostile;
//! - anywhere else, two attackers on opposite sides suffice.
//! While the king sits on the throne, a defender beside it can be pinned
//! against the throne only when more than two attackers surround it.

use crate::board::{Board, Piece, Side, Square, THRONE};

/// Number of attackers on the four squares around the throne
pub fn attackers_around_throne(board: &Board) -> u32 {
    (0..4)
        .filter_map(|dir| THRONE.neighbour(dir))
        .filter(|&sq| board.get(sq) == Piece::Attacker)
        .count() as u32
}

/// Number of hostile squares around the king: attackers, plus the
/// throne itself when the king stands beside it.
pub fn hostile_around_king(board: &Board) -> u32 {
    let Some(king) = board.king_position() else {
        return 0;
    };
    (0..4)
        .filter_map(|dir| king.neighbour(dir))
        .filter(|&sq| board.get(sq) == Piece::Attacker || sq == THRONE)
        .count() as u32
}

/// Whether the king, flanked by an attacker on the far side, may be taken
fn king_capturable(board: &Board) -> bool {
    match board.king_position() {
        Some(king) if king == THRONE => attackers_around_throne(board) == 4,
        Some(king) if king.is_throne_neighbour() => hostile_around_king(board) == 4,
        Some(_) => true,
        None => false,
    }
}

/// An attacker has just moved next to `between`, with `flank` beyond it.
fn attacker_captures(board: &Board, flank: Square, between: Square) -> bool {
    let target = board.get(between);
    if board.get(flank) == Piece::Attacker {
        return match target {
            Piece::Defender => true,
            Piece::King => king_capturable(board),
            _ => false,
        };
    }
    if flank != THRONE {
        return false;
    }
    match board.get(THRONE) {
        Piece::Empty => match target {
            Piece::Defender => true,
            Piece::King => hostile_around_king(board) == 4,
            _ => false,
        },
        Piece::King => {
            attackers_around_throne(board) > 2
                && matches!(target, Piece::Defender | Piece::King)
        }
        _ => false,
    }
}

/// A defender or the king has just moved next to `between`.
fn defender_captures(board: &Board, flank: Square, between: Square) -> bool {
    let hostile_flank =
        matches!(board.get(flank), Piece::Defender | Piece::King) || flank == THRONE;
    hostile_flank && board.get(between) == Piece::Attacker
}

/// Find the squares that `mover`, now standing on `to`, captures in the
/// current position, checking north, east, south and west in turn.
///
/// Captures are removed as they are found, so a later direction sees the
/// board after the earlier ones.
///
/// # Returns
/// The captured squares, in the order they were taken
pub fn resolve_captures(board: &mut Board, to: Square, mover: Piece) -> Vec<Square> {
    let mut captured = Vec::new();

    for dir in 0..4 {
        let Some(flank) = to.rook_move(dir, 2) else {
            continue;
        };
        let between = to.between(flank);

        let takes = match mover {
            Piece::Attacker => attacker_captures(board, flank, between),
            Piece::Defender | Piece::King => defender_captures(board, flank, between),
            Piece::Empty => false,
        };
        if takes {
            capture(board, between);
            captured.push(between);
        }
    }

    captured
}

/// Remove the piece on `sq`. Taking the king ends the game for the attackers.
fn capture(board: &mut Board, sq: Square) {
    let taken = board.get(sq);
    board.record_put(Piece::Empty, sq);
    if taken == Piece::King {
        board.set_winner(Side::Attacker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    fn sq(text: &str) -> Square {
        text.parse().unwrap()
    }

    fn play(board: &mut Board, text: &str) {
        let mv: Move = text.parse().unwrap();
        board.make_move(mv);
    }

    /// Empty board with the given pieces, `turn` to move
    fn setup(turn: Side, pieces: &[(Piece, &str)]) -> Board {
        let mut board = Board::empty(turn);
        for &(piece, at) in pieces {
            board.put(piece, sq(at));
        }
        board.clear_undo();
        board
    }

    #[test]
    fn test_attacker_captures_defender() {
        let mut board = setup(
            Side::Attacker,
            &[
                (Piece::Attacker, "b3"),
                (Piece::Defender, "c3"),
                (Piece::Attacker, "d7"),
                (Piece::King, "h8"),
            ],
        );
        play(&mut board, "d7-3");
        assert_eq!(board.get(sq("c3")), Piece::Empty);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_no_capture_without_flank() {
        let mut board = setup(
            Side::Attacker,
            &[
                (Piece::Defender, "c3"),
                (Piece::Attacker, "d7"),
                (Piece::King, "h8"),
            ],
        );
        play(&mut board, "d7-3");
        assert_eq!(board.get(sq("c3")), Piece::Defender);
    }

    #[test]
    fn test_defender_captures_attacker_against_king() {
        let mut board = setup(
            Side::Defender,
            &[
                (Piece::King, "b3"),
                (Piece::Attacker, "c3"),
                (Piece::Defender, "d7"),
                (Piece::Attacker, "h8"),
            ],
        );
        play(&mut board, "d7-3");
        assert_eq!(board.get(sq("c3")), Piece::Empty);
    }

    #[test]
    fn test_empty_throne_is_hostile_to_attackers() {
        let mut board = setup(
            Side::Defender,
            &[
                (Piece::Attacker, "e4"),
                (Piece::Defender, "a3"),
                (Piece::King, "h8"),
                (Piece::Attacker, "a9"),
            ],
        );
        // Defender lands on e3 with the empty throne beyond the attacker
        play(&mut board, "a3-e");
        assert_eq!(board.get(sq("e4")), Piece::Empty);
    }

    #[test]
    fn test_empty_throne_is_hostile_to_defenders() {
        let mut board = setup(
            Side::Attacker,
            &[
                (Piece::Defender, "e6"),
                (Piece::Attacker, "a7"),
                (Piece::King, "h2"),
            ],
        );
        play(&mut board, "a7-e");
        assert_eq!(board.get(sq("e6")), Piece::Empty);
    }

    #[test]
    fn test_multiple_captures_same_move() {
        let mut board = setup(
            Side::Defender,
            &[
                (Piece::Attacker, "d5"),
                (Piece::Attacker, "c4"),
                (Piece::Attacker, "e4"),
                (Piece::Defender, "d6"),
                (Piece::Defender, "b4"),
                (Piece::Defender, "f4"),
                (Piece::Defender, "d1"),
                (Piece::King, "h8"),
                (Piece::Attacker, "a9"),
            ],
        );
        play(&mut board, "d1-4");
        assert_eq!(board.get(sq("d5")), Piece::Empty);
        assert_eq!(board.get(sq("c4")), Piece::Empty);
        assert_eq!(board.get(sq("e4")), Piece::Empty);
        assert_eq!(board.get(sq("d4")), Piece::Defender);
        assert_eq!(board.piece_locations(Piece::Attacker).count(), 1);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_king_captured_away_from_throne() {
        let mut board = setup(
            Side::Attacker,
            &[
                (Piece::Attacker, "b3"),
                (Piece::King, "c3"),
                (Piece::Attacker, "d7"),
                (Piece::Defender, "h8"),
            ],
        );
        play(&mut board, "d7-3");
        assert_eq!(board.get(sq("c3")), Piece::Empty);
        assert_eq!(board.king_position(), None);
        assert_eq!(board.winner(), Some(Side::Attacker));
    }

    #[test]
    fn test_king_on_throne_needs_four_attackers() {
        let mut board = setup(
            Side::Attacker,
            &[
                (Piece::King, "e5"),
                (Piece::Attacker, "e6"),
                (Piece::Attacker, "e4"),
                (Piece::Attacker, "f5"),
                (Piece::Attacker, "a5"),
                (Piece::Defender, "h8"),
            ],
        );
        assert_eq!(attackers_around_throne(&board), 3);
        // Closing the ring on d5 completes the capture
        play(&mut board, "a5-d");
        assert_eq!(board.king_position(), None);
        assert_eq!(board.winner(), Some(Side::Attacker));
    }

    #[test]
    fn test_king_on_throne_survives_three_attackers() {
        let mut board = setup(
            Side::Attacker,
            &[
                (Piece::King, "e5"),
                (Piece::Attacker, "e6"),
                (Piece::Attacker, "e4"),
                (Piece::Defender, "f5"),
                (Piece::Attacker, "a5"),
                (Piece::Defender, "h8"),
            ],
        );
        play(&mut board, "a5-d");
        assert_eq!(board.king_position(), Some(THRONE));
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_king_beside_throne_needs_three_attackers() {
        // King on e6: throne below counts as hostile, so attackers on d6,
        // f6 and e7 complete the capture.
        let mut board = setup(
            Side::Attacker,
            &[
                (Piece::King, "e6"),
                (Piece::Attacker, "d6"),
                (Piece::Attacker, "f6"),
                (Piece::Attacker, "a7"),
                (Piece::Defender, "h2"),
            ],
        );
        assert_eq!(hostile_around_king(&board), 3);
        play(&mut board, "a7-e");
        assert_eq!(board.king_position(), None);
        assert_eq!(board.winner(), Some(Side::Attacker));
    }

    #[test]
    fn test_king_beside_throne_survives_two_attackers() {
        let mut board = setup(
            Side::Attacker,
            &[
                (Piece::King, "e6"),
                (Piece::Attacker, "d6"),
                (Piece::Attacker, "a7"),
                (Piece::Defender, "h2"),
            ],
        );
        play(&mut board, "a7-e");
        assert_eq!(board.king_position(), Some(sq("e6")));
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_king_beside_throne_flanked_by_attacker() {
        // King on e6 with the throne below and attackers on d6 and e7:
        // closing f6 makes four hostile sides.
        let mut board = setup(
            Side::Attacker,
            &[
                (Piece::King, "e6"),
                (Piece::Attacker, "d6"),
                (Piece::Attacker, "e7"),
                (Piece::Attacker, "f2"),
                (Piece::Defender, "h2"),
            ],
        );
        play(&mut board, "f2-6");
        assert_eq!(board.get(sq("e6")), Piece::Empty);
        assert_eq!(board.king_position(), None);
        assert_eq!(board.winner(), Some(Side::Attacker));
    }

    #[test]
    fn test_king_beside_throne_flanked_by_attacker_survives() {
        // Same as above without e7: only three hostile sides
        let mut board = setup(
            Side::Attacker,
            &[
                (Piece::King, "e6"),
                (Piece::Attacker, "d6"),
                (Piece::Attacker, "f2"),
                (Piece::Defender, "h2"),
            ],
        );
        play(&mut board, "f2-6");
        assert_eq!(hostile_around_king(&board), 3);
        assert_eq!(board.king_position(), Some(sq("e6")));
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_defender_against_occupied_throne() {
        // King on the throne, defender on e6, attackers on d5 and f5.
        // An attacker arriving on e7 pins the defender against the throne.
        let mut board = setup(
            Side::Attacker,
            &[
                (Piece::King, "e5"),
                (Piece::Defender, "e6"),
                (Piece::Attacker, "d5"),
                (Piece::Attacker, "f5"),
                (Piece::Attacker, "e4"),
                (Piece::Attacker, "a7"),
            ],
        );
        play(&mut board, "a7-e");
        assert_eq!(board.get(sq("e6")), Piece::Empty);
        assert_eq!(board.king_position(), Some(THRONE));
    }

    #[test]
    fn test_defender_against_occupied_throne_needs_three() {
        let mut board = setup(
            Side::Attacker,
            &[
                (Piece::King, "e5"),
                (Piece::Defender, "e6"),
                (Piece::Attacker, "d5"),
                (Piece::Attacker, "f5"),
                (Piece::Attacker, "a7"),
            ],
        );
        play(&mut board, "a7-e");
        assert_eq!(board.get(sq("e6")), Piece::Defender);
    }
}
