//! Position evaluation for Tablut

pub mod heuristic;
pub mod score;

pub use heuristic::static_score;
pub use score::{is_decisive, Score};
