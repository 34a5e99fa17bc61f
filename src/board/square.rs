//! Square coordinates and their text notation
//!
//! Columns are lettered `a`-`i` from the left, rows numbered `1`-`9` from the
//! bottom, so `e5` is the throne. Directions are indexed clockwise starting
//! from north: 0 = north (row + 1), 1 = east, 2 = south, 3 = west.

use std::fmt;
use std::str::FromStr;

use super::{BOARD_SIZE, TOTAL_CELLS};
use crate::error::TablutError;

/// Column/row offsets for the four directions, clockwise from north
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // North
    (1, 0),  // East
    (0, -1), // South
    (-1, 0), // West
];

/// The throne (centre square) and its four orthogonal neighbours
pub const THRONE: Square = Square::new(4, 4);
pub const NTHRONE: Square = Square::new(4, 5);
pub const STHRONE: Square = Square::new(4, 3);
pub const WTHRONE: Square = Square::new(3, 4);
pub const ETHRONE: Square = Square::new(5, 4);

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub col: u8,
    pub row: u8,
}

impl Square {
    #[inline]
    pub const fn new(col: u8, row: u8) -> Self {
        debug_assert!(col < BOARD_SIZE as u8 && row < BOARD_SIZE as u8);
        Self { col, row }
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    /// Canonical index: row-major, bottom row first
    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < TOTAL_CELLS);
        Self {
            col: (idx % BOARD_SIZE) as u8,
            row: (idx / BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(col: i32, row: i32) -> bool {
        col >= 0 && col < BOARD_SIZE as i32 && row >= 0 && row < BOARD_SIZE as i32
    }

    /// All squares in canonical index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..TOTAL_CELLS).map(Square::from_index)
    }

    /// True for squares on the outer ring
    #[inline]
    pub fn is_edge(self) -> bool {
        let last = BOARD_SIZE as u8 - 1;
        self.col == 0 || self.row == 0 || self.col == last || self.row == last
    }

    /// True for the four squares orthogonally adjacent to the throne
    #[inline]
    pub fn is_throne_neighbour(self) -> bool {
        self == NTHRONE || self == ETHRONE || self == STHRONE || self == WTHRONE
    }

    /// Square `steps` away in direction `dir`, or `None` off the board.
    pub fn rook_move(self, dir: usize, steps: i32) -> Option<Square> {
        let (dc, dr) = DIRECTIONS[dir];
        let col = self.col as i32 + dc * steps;
        let row = self.row as i32 + dr * steps;
        if Square::is_valid(col, row) {
            Some(Square::new(col as u8, row as u8))
        } else {
            None
        }
    }

    /// Orthogonal neighbour in direction `dir`
    #[inline]
    pub fn neighbour(self, dir: usize) -> Option<Square> {
        self.rook_move(dir, 1)
    }

    /// The two squares diagonally adjacent to this one that also touch
    /// the neighbour in direction `dir`. For north these are north-east
    /// and north-west.
    pub fn diagonals(self, dir: usize) -> [Option<Square>; 2] {
        let Some(side) = self.neighbour(dir) else {
            return [None, None];
        };
        [side.neighbour((dir + 1) % 4), side.neighbour((dir + 3) % 4)]
    }

    /// True if `to` lies on the same row or column and differs from this square
    #[inline]
    pub fn is_rook_move(self, to: Square) -> bool {
        self != to && (self.col == to.col || self.row == to.row)
    }

    /// Direction from this square towards `to`, if they share a line
    pub fn direction(self, to: Square) -> Option<usize> {
        if !self.is_rook_move(to) {
            return None;
        }
        let dir = if to.row > self.row {
            0
        } else if to.col > self.col {
            1
        } else if to.row < self.row {
            2
        } else {
            3
        };
        Some(dir)
    }

    /// Square midway between this one and `other`, which must be two
    /// steps away along a row or column.
    pub fn between(self, other: Square) -> Square {
        debug_assert!(self.is_rook_move(other));
        Square::new(
            ((self.col as u16 + other.col as u16) / 2) as u8,
            ((self.row as u16 + other.row as u16) / 2) as u8,
        )
    }

    /// Distance to the nearest edge, as (row distance, column distance)
    pub fn edge_distance(self) -> (u8, u8) {
        let last = BOARD_SIZE as u8 - 1;
        (self.row.min(last - self.row), self.col.min(last - self.col))
    }

    #[inline]
    pub(crate) fn col_char(self) -> char {
        (b'a' + self.col) as char
    }

    #[inline]
    pub(crate) fn row_char(self) -> char {
        (b'1' + self.row) as char
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col_char(), self.row_char())
    }
}

/// Parse a column letter `a`-`i`
pub(crate) fn parse_col(c: char) -> Option<u8> {
    match c {
        'a'..='i' => Some(c as u8 - b'a'),
        _ => None,
    }
}

/// Parse a row digit `1`-`9`
pub(crate) fn parse_row(c: char) -> Option<u8> {
    match c {
        '1'..='9' => Some(c as u8 - b'1'),
        _ => None,
    }
}

impl FromStr for Square {
    type Err = TablutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TablutError::InvalidSquare {
            text: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(c), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        match (parse_col(c), parse_row(r)) {
            (Some(col), Some(row)) => Ok(Square::new(col, row)),
            _ => Err(invalid()),
        }
    }
}
