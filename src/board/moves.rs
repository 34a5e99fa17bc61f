//! Rook moves, their text notation, and the precomputed move tables
//!
//! A move is written as the starting square, a dash, and the single
//! coordinate that changes: `e7-8` moves up the e-file to e8, `e6-f` moves
//! along the sixth row to f6. The long form `e6-f6` is accepted on input.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::square::{parse_col, parse_row};
use super::{Square, TOTAL_CELLS};
use crate::error::TablutError;

/// A rook move between two distinct squares on a common row or column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Create a move, or `None` if `from`-`to` is not a rook move.
    #[inline]
    pub fn new(from: Square, to: Square) -> Option<Self> {
        from.is_rook_move(to).then_some(Self { from, to })
    }

    #[inline]
    pub fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub fn to(self) -> Square {
        self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from.col == self.to.col {
            write!(f, "{}-{}", self.from, self.to.row_char())
        } else {
            write!(f, "{}-{}", self.from, self.to.col_char())
        }
    }
}

impl FromStr for Move {
    type Err = TablutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TablutError::InvalidMove {
            text: s.to_string(),
        };
        let (from_text, to_text) = s.trim().split_once('-').ok_or_else(invalid)?;
        let from: Square = from_text.parse().map_err(|_| invalid())?;

        let mut chars = to_text.chars();
        let to = match (chars.next(), chars.next(), chars.next()) {
            (Some(c), None, None) => {
                if let Some(row) = parse_row(c) {
                    Square::new(from.col, row)
                } else if let Some(col) = parse_col(c) {
                    Square::new(col, from.row)
                } else {
                    return Err(invalid());
                }
            }
            (Some(_), Some(_), None) => to_text.parse().map_err(|_| invalid())?,
            _ => return Err(invalid()),
        };

        Move::new(from, to).ok_or_else(invalid)
    }
}

/// ROOK_MOVES[sq][dir] lists the moves from `sq` in direction `dir`,
/// nearest destination first.
static ROOK_MOVES: OnceLock<Vec<[Vec<Move>; 4]>> = OnceLock::new();

fn build_rook_moves() -> Vec<[Vec<Move>; 4]> {
    (0..TOTAL_CELLS)
        .map(Square::from_index)
        .map(|from| {
            std::array::from_fn(|dir| {
                (1..)
                    .map_while(|steps| from.rook_move(dir, steps))
                    .map(|to| Move { from, to })
                    .collect()
            })
        })
        .collect()
}

/// Moves from `from` in direction `dir`, ordered by increasing distance.
///
/// The table is built on first use and shared read-only afterwards.
#[inline]
pub fn rook_moves(from: Square, dir: usize) -> &'static [Move] {
    &ROOK_MOVES.get_or_init(build_rook_moves)[from.index()][dir]
}
