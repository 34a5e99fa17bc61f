//! Bitboard implementation for piece-location sets

use super::{Square, TOTAL_CELLS};

/// Set of squares, one bit per square index.
/// A single u128 covers all 81 cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: u128,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set a bit at square
    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.bits |= 1u128 << sq.index();
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Iterate over set squares in index order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut board = Bitboard::new();
        for sq in iter {
            board.set(sq);
        }
        board
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u128,
}

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.bits &= self.bits - 1;
        debug_assert!(idx < TOTAL_CELLS);
        Some(Square::from_index(idx))
    }
}
