//! Main AI engine
//!
//! [`AIEngine`] is what a driver calls once per AI turn. It picks the search
//! depth (from the piece count, unless pinned by [`EngineConfig`]), runs the
//! alpha-beta [`Searcher`] on a copy of the board and reports the chosen
//! move together with search statistics.
//!
//! # Example
//!
//! ```
//! use tablut::{AIEngine, Board};
//!
//! let mut engine = AIEngine::with_depth(1);
//! let mut board = Board::new();
//!
//! let result = engine.choose_move_with_stats(&board);
//! let mv = result.best_move.expect("Black has moves in the opening");
//! assert!(board.is_legal_move(mv));
//! board.make_move(mv);
//! println!("Black plays {mv}, {} nodes in {}ms", result.nodes, result.time_ms);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Move};
use crate::config::EngineConfig;
use crate::eval::is_decisive;
use crate::search::{max_depth, SearchResult, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Minimax value of the position, positive favouring White
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            cutoffs: result.stats.cutoffs,
            time_ms,
        }
    }
}

/// AI engine choosing moves for whichever side is to move.
///
/// # Example
///
/// ```
/// use tablut::{AIEngine, Board};
///
/// let mut engine = AIEngine::new();
/// let board = Board::new();
/// if let Some(mv) = engine.choose_move(&board) {
///     println!("Play {mv}");
/// }
/// ```
#[derive(Debug, Default)]
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
}

impl AIEngine {
    /// Engine that picks its depth from the number of pieces left.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Engine that always searches `depth` plies, at least one.
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self::with_config(EngineConfig { depth: Some(depth) })
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(),
            config,
        }
    }

    /// Depth the next search of `board` will use. A pinned depth of zero
    /// is raised to one so a live position always yields a move.
    #[must_use]
    pub fn search_depth(&self, board: &Board) -> u8 {
        self.config
            .depth
            .map_or_else(|| max_depth(board), |depth| depth.max(1))
    }

    /// Best move for the side to move, or `None` if the game is over or
    /// that side cannot move.
    ///
    /// Use `choose_move_with_stats` if you need search statistics.
    #[must_use]
    pub fn choose_move(&mut self, board: &Board) -> Option<Move> {
        self.choose_move_with_stats(board).best_move
    }

    /// Search `board` and report the move along with score, depth, node
    /// count, cutoffs and elapsed time. `board` is never modified.
    #[must_use]
    pub fn choose_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let depth = self.search_depth(board);

        let result = self.searcher.search(board, depth);
        let first_move_rate = result.stats.first_move_rate();
        let result = MoveResult::from_search(result, start.elapsed().as_millis() as u64);

        debug!(
            side = %board.turn(),
            best_move = ?result.best_move.map(|mv| mv.to_string()),
            score = result.score,
            decisive = is_decisive(result.score),
            depth = result.depth,
            nodes = result.nodes,
            cutoffs = result.cutoffs,
            first_move_rate,
            time_ms = result.time_ms,
            "search finished"
        );
        result
    }
}
