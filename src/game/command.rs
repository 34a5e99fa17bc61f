//! Driver commands read from the input, one per line

use std::fmt;
use std::str::FromStr;

use crate::board::{Move, Side};
use crate::error::TablutError;

/// One line of driver input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play a move for the side to move
    Move(Move),
    /// Start a new game
    New,
    /// Take back the last move
    Undo,
    /// Limit each side to this many moves
    Limit(u32),
    /// Print the board
    Dump,
    /// Let the engine play this side
    Auto(Side),
    /// Read this side's moves from the input
    Manual(Side),
    Quit,
}

fn parse_side(text: &str) -> Option<Side> {
    match text {
        "white" => Some(Side::Defender),
        "black" => Some(Side::Attacker),
        _ => None,
    }
}

impl FromStr for Command {
    type Err = TablutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let unknown = || TablutError::UnknownCommand {
            text: line.to_string(),
        };
        let words: Vec<String> = line.split_whitespace().map(str::to_lowercase).collect();

        match words.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
            ["new"] => Ok(Command::New),
            ["undo"] => Ok(Command::Undo),
            ["dump"] => Ok(Command::Dump),
            ["quit"] => Ok(Command::Quit),
            ["limit", n] => n.parse().map(Command::Limit).map_err(|_| unknown()),
            ["auto", side] => parse_side(side).map(Command::Auto).ok_or_else(unknown),
            ["manual", side] => parse_side(side).map(Command::Manual).ok_or_else(unknown),
            [text] if text.contains('-') => text.parse().map(Command::Move),
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |side: &Side| side.name().to_lowercase();
        match self {
            Command::Move(mv) => write!(f, "{mv}"),
            Command::New => f.write_str("new"),
            Command::Undo => f.write_str("undo"),
            Command::Limit(n) => write!(f, "limit {n}"),
            Command::Dump => f.write_str("dump"),
            Command::Auto(s) => write!(f, "auto {}", side(s)),
            Command::Manual(s) => write!(f, "manual {}", side(s)),
            Command::Quit => f.write_str("quit"),
        }
    }
}
