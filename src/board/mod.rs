//! Board representation for Tablut

pub mod bitboard;
pub mod board;
pub mod moves;
pub mod square;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;
pub use moves::{rook_moves, Move};
pub use square::{Square, ETHRONE, NTHRONE, STHRONE, THRONE, WTHRONE};

use std::fmt;

/// Board size (9x9)
pub const BOARD_SIZE: usize = 9;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 81

/// Contents of a single square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Empty,
    Attacker,
    Defender,
    King,
}

impl Piece {
    /// Side owning this piece. The king plays for the defenders.
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Piece::Attacker => Some(Side::Attacker),
            Piece::Defender | Piece::King => Some(Side::Defender),
            Piece::Empty => None,
        }
    }

    /// Single-character form used by the renderer and position encoding
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Piece::Empty => '-',
            Piece::Attacker => 'B',
            Piece::Defender => 'W',
            Piece::King => 'K',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The two sides. Attackers play black and move first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Attacker,
    Defender,
}

impl Side {
    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }

    /// Ordinary piece of this side (the king is never returned)
    #[inline]
    pub fn piece(self) -> Piece {
        match self {
            Side::Attacker => Piece::Attacker,
            Side::Defender => Piece::Defender,
        }
    }

    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Side::Attacker => 'B',
            Side::Defender => 'W',
        }
    }

    /// Colour name used in game transcripts
    pub fn name(self) -> &'static str {
        match self {
            Side::Attacker => "Black",
            Side::Defender => "White",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
