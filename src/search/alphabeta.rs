//! Minimax search with alpha-beta pruning
//!
//! The searcher clones the caller's board once and explores the game tree on
//! that copy, playing each candidate with [`Board::make_move`] and taking it
//! back with [`Board::undo`] before looking at the next one. White maximises
//! and Black minimises the [`static_score`].
//!
//! Moves are tried in generation order and the running best only changes on
//! a strict improvement, so among equally scored moves the first one
//! generated is chosen.
//!
//! # Example
//!
//! ```
//! use tablut::board::Board;
//! use tablut::search::{max_depth, Searcher};
//!
//! let board = Board::new();
//! let mut searcher = Searcher::new();
//!
//! let result = searcher.search(&board, 1);
//! assert!(result.best_move.is_some());
//! assert_eq!(max_depth(&board), 2);
//! ```

use crate::board::{Board, Move, Side};
use crate::eval::{static_score, Score};

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Total alpha-beta cutoffs
    pub cutoffs: u64,
    /// Cutoffs on the first move tried at a node
    pub first_move_cutoffs: u64,
}

impl SearchStats {
    /// Percentage of cutoffs that happened on the first move tried
    pub fn first_move_rate(&self) -> f64 {
        if self.cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when the side to move has none or the game is over
    pub best_move: Option<Move>,
    /// Minimax value of the root position
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Total nodes visited, root included
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Search depth for `board`: shallow while the board is crowded, deeper as
/// pieces come off.
#[must_use]
pub fn max_depth(board: &Board) -> u8 {
    match board.piece_count() {
        n if n > 20 => 2,
        n if n > 10 => 3,
        _ => 4,
    }
}

/// Fixed-depth alpha-beta searcher.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `board` to `depth` plies for the side to move.
    ///
    /// `board` is left untouched; the search runs on a private copy.
    #[must_use]
    pub fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let mut work_board = board.clone();
        let maximizing = board.turn() == Side::Defender;
        let (best_move, score) = self.search_root(&mut work_board, depth, maximizing);

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Root node: same as [`Searcher::alpha_beta`] but remembers which move
    /// produced the best value.
    fn search_root(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
    ) -> (Option<Move>, i32) {
        self.nodes += 1;
        if depth == 0 || board.winner().is_some() {
            return (None, static_score(board));
        }

        let moves = board.legal_moves(board.turn());
        let Some(&first) = moves.first() else {
            return (None, static_score(board));
        };

        let mut alpha = -Score::INFTY;
        let mut beta = Score::INFTY;
        let mut best_move = first;
        let mut best = if maximizing {
            -Score::INFTY
        } else {
            Score::INFTY
        };

        for (i, &mv) in moves.iter().enumerate() {
            board.make_move(mv);
            let score = self.alpha_beta(board, depth - 1, !maximizing, alpha, beta);
            board.undo();

            if maximizing {
                if score > best {
                    best = score;
                    best_move = mv;
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                    best_move = mv;
                }
                beta = beta.min(best);
            }
            if beta <= alpha {
                self.record_cutoff(i);
                break;
            }
        }

        (Some(best_move), best)
    }

    /// Minimax value of `board` searched `depth` plies deep within the
    /// window `alpha..beta`.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 || board.winner().is_some() {
            return static_score(board);
        }

        let moves = board.legal_moves(board.turn());
        if moves.is_empty() {
            return static_score(board);
        }

        let mut best = if maximizing {
            -Score::INFTY
        } else {
            Score::INFTY
        };

        for (i, &mv) in moves.iter().enumerate() {
            board.make_move(mv);
            let score = self.alpha_beta(board, depth - 1, !maximizing, alpha, beta);
            board.undo();

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                self.record_cutoff(i);
                break;
            }
        }

        best
    }

    #[inline]
    fn record_cutoff(&mut self, move_index: usize) {
        self.stats.cutoffs += 1;
        if move_index == 0 {
            self.stats.first_move_cutoffs += 1;
        }
    }
}
