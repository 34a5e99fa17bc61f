//! Command-line configuration
//!
//! [`Cli`] is parsed by clap and turned into a [`GameConfig`] for the driver
//! and an [`EngineConfig`] for each AI player.

use clap::{Parser, ValueEnum};

use crate::board::Side;

/// Who makes the moves for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    /// Moves are read from the input
    Human,
    /// Moves are chosen by the engine
    Ai,
}

/// Play Tablut on the terminal against the computer, or watch it play itself.
#[derive(Parser, Debug)]
#[command(name = "tablut", version)]
pub struct Cli {
    /// Player for White, the defenders
    #[arg(long, value_enum, default_value_t = PlayerKind::Ai)]
    pub white: PlayerKind,

    /// Player for Black, the attackers
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    pub black: PlayerKind,

    /// Maximum number of moves per side
    #[arg(long, value_name = "N")]
    pub limit: Option<u32>,

    /// Fixed search depth, instead of choosing it from the piece count
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=6))]
    pub depth: Option<u8>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

/// Settings for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub white: PlayerKind,
    pub black: PlayerKind,
    pub move_limit: Option<u32>,
    pub depth: Option<u8>,
    pub log_level: String,
}

impl GameConfig {
    /// Player kind configured for `side`
    pub fn player(&self, side: Side) -> PlayerKind {
        match side {
            Side::Attacker => self.black,
            Side::Defender => self.white,
        }
    }

    pub fn engine(&self) -> EngineConfig {
        EngineConfig { depth: self.depth }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white: PlayerKind::Ai,
            black: PlayerKind::Human,
            move_limit: None,
            depth: None,
            log_level: "warn".to_string(),
        }
    }
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        Self {
            white: cli.white,
            black: cli.black,
            move_limit: cli.limit,
            depth: cli.depth,
            log_level: cli.log_level,
        }
    }
}

/// Search settings for [`AIEngine`](crate::AIEngine)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fixed depth; `None` picks it from the number of pieces on the board
    pub depth: Option<u8>,
}
