//! Search module for Tablut AI
//!
//! Contains the fixed-depth minimax searcher with alpha-beta pruning and the
//! piece-count depth selector.

pub mod alphabeta;

pub use alphabeta::{max_depth, SearchResult, SearchStats, Searcher};
