//! Move sources for the two sides
//!
//! A [`Player`] is asked for its next command whenever its side is to move.
//! [`HumanPlayer`] reads it from the input; [`AiPlayer`] asks the engine.

use std::io::BufRead;

use tracing::{debug, info};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::engine::AIEngine;
use crate::error::{Result, TablutError};

use super::Command;

/// Something that can decide what a side does next
pub trait Player {
    /// Next command for the side to move on `board`. Human players read it
    /// from `input`; end of input yields [`Command::Quit`].
    fn produce_move(&mut self, board: &Board, input: &mut dyn BufRead) -> Result<Command>;

    /// True if this player's moves come from the input
    fn is_manual(&self) -> bool;
}

/// Player whose commands are typed in
#[derive(Debug, Default)]
pub struct HumanPlayer;

impl HumanPlayer {
    pub fn new() -> Self {
        Self
    }
}

/// Read lines until one holds a command. Blank lines and `#` comments are
/// skipped.
pub(crate) fn read_command(input: &mut dyn BufRead) -> Result<Command> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(Command::Quit);
        }
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        debug!(text, "input");
        return text.parse();
    }
}

impl Player for HumanPlayer {
    fn produce_move(&mut self, _board: &Board, input: &mut dyn BufRead) -> Result<Command> {
        read_command(input)
    }

    fn is_manual(&self) -> bool {
        true
    }
}

/// Player driven by [`AIEngine`]
#[derive(Debug, Default)]
pub struct AiPlayer {
    engine: AIEngine,
}

impl AiPlayer {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: AIEngine::with_config(config),
        }
    }
}

impl Player for AiPlayer {
    fn produce_move(&mut self, board: &Board, _input: &mut dyn BufRead) -> Result<Command> {
        let result = self.engine.choose_move_with_stats(board);
        let mv = result
            .best_move
            .ok_or(TablutError::NoMove { side: board.turn() })?;
        info!(side = %board.turn(), %mv, score = result.score, "engine move");
        Ok(Command::Move(mv))
    }

    fn is_manual(&self) -> bool {
        false
    }
}
