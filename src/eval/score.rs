//! Score constants for Tablut evaluation
//!
//! Scores are signed from White's point of view: positive values favour the
//! defenders, negative values the attackers.

/// Score magnitudes and heuristic weights
pub struct Score;

impl Score {
    /// A magnitude greater than any position score
    pub const INFTY: i32 = i32::MAX;
    /// Game won: king escaped (positive) or captured (negative)
    pub const WINNING_VALUE: i32 = i32::MAX - 20;
    /// King has a free run to the edge this turn. Kept below WINNING_VALUE
    /// so the search never prefers a promised win over one already taken.
    pub const WILL_WIN_VALUE: i32 = i32::MAX - 40;

    /// Value of each defender still on the board
    pub const DEFENDER: i32 = 4;
    /// Cost of each attacker still on the board
    pub const ATTACKER: i32 = 2;
    /// Cost per step between the king and its nearest edge
    pub const EDGE_DISTANCE: i32 = 2;
    /// Cost per attacker orthogonally adjacent to the king; diagonal
    /// attackers cost half as much
    pub const KING_PRESSURE: i32 = 4;
}

/// True if `score` is a decided game rather than a heuristic estimate
#[inline]
pub fn is_decisive(score: i32) -> bool {
    score.abs() >= Score::WILL_WIN_VALUE
}
