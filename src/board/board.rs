//! Board state with reversible move application
//!
//! Every cell mutation made while playing a move goes through an edit log
//! tagged with the ply that caused it, so [`Board::undo`] can restore the
//! previous position exactly. Positions seen so far are kept as encoded
//! strings for repetition detection.

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use super::{Bitboard, Move, Piece, Side, Square, BOARD_SIZE, TOTAL_CELLS};
use super::{ETHRONE, NTHRONE, STHRONE, THRONE, WTHRONE};
use crate::error::{Result, TablutError};
use crate::rules::{capture, movegen, win};

/// Initial positions of attackers
const INITIAL_ATTACKERS: [Square; 16] = [
    Square::new(0, 3),
    Square::new(0, 4),
    Square::new(0, 5),
    Square::new(1, 4),
    Square::new(8, 3),
    Square::new(8, 4),
    Square::new(8, 5),
    Square::new(7, 4),
    Square::new(3, 0),
    Square::new(4, 0),
    Square::new(5, 0),
    Square::new(4, 1),
    Square::new(3, 8),
    Square::new(4, 8),
    Square::new(5, 8),
    Square::new(4, 7),
];

/// Initial positions of the king's defenders
const INITIAL_DEFENDERS: [Square; 8] = [
    NTHRONE,
    ETHRONE,
    STHRONE,
    WTHRONE,
    Square::new(4, 6),
    Square::new(4, 2),
    Square::new(2, 4),
    Square::new(6, 4),
];

/// Moves allowed per side unless a limit is set: effectively unbounded
pub const DEFAULT_MOVE_LIMIT: u32 = u32::MAX / 2;

/// One logged cell mutation: the piece that was on `square` before ply `ply`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edit {
    prior: Piece,
    square: Square,
    ply: u32,
}

/// Game-level state in force before a ply was played
#[derive(Debug, Clone, Copy)]
struct PlyRecord {
    turn: Side,
    winner: Option<Side>,
}

/// Tablut position with turn, result, and undo history
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Piece; TOTAL_CELLS],
    turn: Side,
    winner: Option<Side>,
    king_position: Option<Square>,
    /// Plies played since the initial position and not undone
    move_count: u32,
    /// Maximum number of moves per side
    move_limit: u32,
    /// True when the current position is a repeat (ending the game)
    repeated: bool,
    seen_positions: HashSet<String>,
    edit_log: Vec<Edit>,
    plies: Vec<PlyRecord>,
}

impl Board {
    /// Board in the standard starting layout, attackers to move.
    pub fn new() -> Self {
        let mut board = Self::empty(Side::Attacker);
        board.put(Piece::King, THRONE);
        for sq in INITIAL_DEFENDERS {
            board.put(Piece::Defender, sq);
        }
        for sq in INITIAL_ATTACKERS {
            board.put(Piece::Attacker, sq);
        }
        board.clear_undo();
        board
    }

    /// Board with no pieces at all, for setting up positions with [`Board::put`].
    pub fn empty(turn: Side) -> Self {
        let mut board = Self {
            cells: [Piece::Empty; TOTAL_CELLS],
            turn,
            winner: None,
            king_position: None,
            move_count: 0,
            move_limit: DEFAULT_MOVE_LIMIT,
            repeated: false,
            seen_positions: HashSet::new(),
            edit_log: Vec::with_capacity(256),
            plies: Vec::with_capacity(128),
        };
        board.clear_undo();
        board
    }

    /// Get piece at square
    #[inline]
    pub fn get(&self, sq: Square) -> Piece {
        self.cells[sq.index()]
    }

    /// Place a piece without recording it for undo.
    /// Use [`Board::make_move`] for game moves. Call [`Board::clear_undo`]
    /// after a setup so the new position is the repetition baseline.
    pub fn put(&mut self, piece: Piece, sq: Square) {
        if piece == Piece::King {
            self.king_position = Some(sq);
        } else if self.king_position == Some(sq) {
            self.king_position = None;
        }
        self.cells[sq.index()] = piece;
    }

    /// Set the side to move (position setup only)
    pub fn set_turn(&mut self, side: Side) {
        self.turn = side;
    }

    /// Put `piece` on `sq`, logging the prior contents against the ply
    /// currently being played.
    pub(crate) fn record_put(&mut self, piece: Piece, sq: Square) {
        self.edit_log.push(Edit {
            prior: self.get(sq),
            square: sq,
            ply: self.move_count + 1,
        });
        self.put(piece, sq);
    }

    pub(crate) fn set_winner(&mut self, side: Side) {
        self.winner = Some(side);
    }

    /// Side whose turn it is
    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Winner in the current position, or `None` while the game is on
    #[inline]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// True iff the game ended because the current position repeated
    #[inline]
    pub fn repeated_position(&self) -> bool {
        self.repeated
    }

    /// Location of the king, `None` once captured
    #[inline]
    pub fn king_position(&self) -> Option<Square> {
        self.king_position
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    pub fn move_limit(&self) -> u32 {
        self.move_limit
    }

    /// Limit each side to `limit` moves.
    ///
    /// Fails when the moves already played use up the whole allowance.
    pub fn set_move_limit(&mut self, limit: u32) -> Result<()> {
        if 2 * u64::from(limit) <= u64::from(self.move_count) {
            return Err(TablutError::MoveLimit {
                limit,
                moves: self.move_count,
            });
        }
        self.move_limit = limit;
        Ok(())
    }

    /// Squares holding exactly `piece`
    pub fn piece_locations(&self, piece: Piece) -> Bitboard {
        Square::all().filter(|&sq| self.get(sq) == piece).collect()
    }

    /// Number of attackers, defenders and king on the board
    pub fn piece_count(&self) -> u32 {
        self.cells.iter().filter(|&&p| p != Piece::Empty).count() as u32
    }

    /// Turn character followed by one character per square in index order
    pub fn encoded(&self) -> String {
        let mut out = String::with_capacity(TOTAL_CELLS + 1);
        out.push(self.turn.to_char());
        out.extend(self.cells.iter().map(|p| p.to_char()));
        out
    }

    /// All legal moves for `side`, ignoring whose turn it is
    #[inline]
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        movegen::legal_moves(self, side)
    }

    #[inline]
    pub fn has_move(&self, side: Side) -> bool {
        movegen::has_move(self, side)
    }

    /// True iff `from`-`to` is a rook move whose path, `to` included, is empty.
    #[inline]
    pub fn is_unblocked_move(&self, from: Square, to: Square) -> bool {
        movegen::is_unblocked_move(self, from, to)
    }

    /// True iff `from`-`to` is legal for the side to move.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        let piece = self.get(from);
        if to == THRONE && piece != Piece::King {
            return false;
        }
        piece.side() == Some(self.turn) && self.is_unblocked_move(from, to)
    }

    #[inline]
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.is_legal(mv.from(), mv.to())
    }

    /// Play `mv` after checking it, for moves coming from outside the engine.
    pub fn try_make_move(&mut self, mv: Move) -> Result<()> {
        if !self.is_legal_move(mv) {
            return Err(TablutError::IllegalMove { mv });
        }
        self.make_move(mv);
        Ok(())
    }

    /// Play `mv`, resolving captures, wins and repetition.
    ///
    /// # Panics
    ///
    /// Panics if `mv` is not legal in the current position.
    pub fn make_move(&mut self, mv: Move) {
        assert!(
            self.is_legal_move(mv),
            "illegal move {mv} with {} to move",
            self.turn
        );
        let mover = self.turn;
        self.plies.push(PlyRecord {
            turn: mover,
            winner: self.winner,
        });

        if win::move_limit_reached(self) {
            self.winner = Some(mover.opponent());
        }

        let piece = self.get(mv.from());
        self.record_put(piece, mv.to());
        self.record_put(Piece::Empty, mv.from());

        let captured = capture::resolve_captures(self, mv.to(), piece);
        if !captured.is_empty() {
            debug!(%mv, captured = captured.len(), "pieces captured");
        }

        if win::is_king_escape(piece, mv.to()) {
            self.winner = Some(Side::Defender);
        }

        match win::following_turn(self, mover) {
            Some(next) => self.turn = next,
            None => self.winner = Some(mover),
        }

        self.move_count += 1;
        self.check_repeated();
    }

    /// Record the current position, or end the game in favour of the side
    /// to move if it has been seen before.
    fn check_repeated(&mut self) {
        let position = self.encoded();
        if self.seen_positions.contains(&position) {
            self.repeated = true;
            self.winner = Some(self.turn);
        } else {
            self.seen_positions.insert(position);
        }
    }

    /// Take back the last ply. Has no effect on the initial position or
    /// after [`Board::clear_undo`] has discarded the history.
    pub fn undo(&mut self) {
        if self.move_count == 0 {
            return;
        }
        let Some(record) = self.plies.pop() else {
            return;
        };

        if !self.repeated {
            self.seen_positions.remove(&self.encoded());
        }
        self.repeated = false;

        let ply = self.move_count;
        while let Some(edit) = self.edit_log.last().copied() {
            if edit.ply != ply {
                break;
            }
            self.edit_log.pop();
            self.put(edit.prior, edit.square);
        }

        self.turn = record.turn;
        self.winner = record.winner;
        self.move_count -= 1;
    }

    /// Forget the undo history and the positions seen so far. The current
    /// position and result are left as they are.
    pub fn clear_undo(&mut self) {
        self.edit_log.clear();
        self.plies.clear();
        self.seen_positions.clear();
        self.seen_positions.insert(self.encoded());
    }

    /// Text diagram, top row first. With `coordinates`, row numbers are
    /// printed on the left and column letters underneath.
    pub fn render(&self, coordinates: bool) -> String {
        let mut out = String::with_capacity(256);
        for row in (0..BOARD_SIZE as u8).rev() {
            if coordinates {
                out.push_str(&format!("{:2}", row + 1));
            } else {
                out.push_str("  ");
            }
            for col in 0..BOARD_SIZE as u8 {
                out.push(' ');
                out.push(self.get(Square::new(col, row)).to_char());
            }
            out.push('\n');
        }
        if coordinates {
            out.push_str("  ");
            for col in 0..BOARD_SIZE as u8 {
                out.push(' ');
                out.push((b'a' + col) as char);
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}
