//! Game driver
//!
//! [`Game`] owns the authoritative [`Board`] and one [`Player`] per side. On
//! each step it asks the player whose turn it is for a command (or reads one
//! from the input once the game is decided), carries it out and writes the
//! transcript: `* <move>` after every engine move and `* White wins.` or
//! `* Black wins.` when the game ends.
//!
//! ```
//! use std::io::Cursor;
//! use tablut::config::{GameConfig, PlayerKind};
//! use tablut::game::Game;
//!
//! let config = GameConfig {
//!     white: PlayerKind::Human,
//!     black: PlayerKind::Human,
//!     ..GameConfig::default()
//! };
//! let mut output = Vec::new();
//! let mut game = Game::new(config, &mut output).unwrap();
//! game.run(&mut Cursor::new("h5-6\ne7-f\nquit\n")).unwrap();
//! assert_eq!(game.board().move_count(), 2);
//! ```

pub mod command;
pub mod player;

pub use command::Command;
pub use player::{AiPlayer, HumanPlayer, Player};

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::board::{Board, Side};
use crate::config::{GameConfig, PlayerKind};
use crate::error::{Result, TablutError};

use player::read_command;

/// A game session between two players
pub struct Game<W: Write> {
    board: Board,
    config: GameConfig,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    output: W,
    /// Set once the current winner has been announced
    announced: bool,
}

impl<W: Write> Game<W> {
    /// New session writing its transcript to `output`.
    ///
    /// Fails if the configured move limit is zero.
    pub fn new(config: GameConfig, output: W) -> Result<Self> {
        let board = new_board(&config)?;
        let white = make_player(config.white, &config);
        let black = make_player(config.black, &config);
        Ok(Self {
            board,
            config,
            white,
            black,
            output,
            announced: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// True if `side`'s moves are read from the input
    pub fn is_manual(&self, side: Side) -> bool {
        match side {
            Side::Attacker => self.black.is_manual(),
            Side::Defender => self.white.is_manual(),
        }
    }

    /// Play until `quit` or the end of `input`, returning the winner of the
    /// game in progress at that point.
    ///
    /// Bad input is reported on stderr and skipped. I/O failures and an
    /// engine with nothing to play end the session with an error.
    pub fn run(&mut self, input: &mut dyn BufRead) -> Result<Option<Side>> {
        loop {
            let engine_move = self.board.winner().is_none() && !self.is_manual(self.board.turn());
            // Engine failures end the session; bad input does not
            let next = if engine_move {
                Ok(self.player_command(input)?)
            } else if self.board.winner().is_some() {
                read_command(input)
            } else {
                self.player_command(input)
            };
            let command = match next {
                Ok(command) => command,
                Err(err @ TablutError::Io(_)) => return Err(err),
                Err(err) => {
                    report(&err);
                    continue;
                }
            };

            match self.execute(command) {
                Ok(true) => {
                    if let (true, Command::Move(mv)) = (engine_move, command) {
                        writeln!(self.output, "* {mv}")?;
                    }
                }
                Ok(false) => break,
                Err(err) => report(&err),
            }
            self.announce_winner()?;
        }
        self.output.flush()?;
        Ok(self.board.winner())
    }

    /// Ask the player whose turn it is for a command
    fn player_command(&mut self, input: &mut dyn BufRead) -> Result<Command> {
        let player = match self.board.turn() {
            Side::Attacker => &mut self.black,
            Side::Defender => &mut self.white,
        };
        player.produce_move(&self.board, input)
    }

    /// Carry out one command. Returns `false` for `quit`.
    pub fn execute(&mut self, command: Command) -> Result<bool> {
        debug!(%command, "execute");
        match command {
            Command::Move(mv) => {
                if self.board.winner().is_some() {
                    return Err(TablutError::GameOver);
                }
                self.board.try_make_move(mv)?;
            }
            Command::New => {
                self.board = new_board(&self.config)?;
                self.announced = false;
                info!("new game");
            }
            Command::Undo => self.undo(),
            Command::Limit(limit) => self.board.set_move_limit(limit)?,
            Command::Dump => {
                writeln!(self.output, "===")?;
                write!(self.output, "{}", self.board.render(false))?;
                writeln!(self.output, "===")?;
            }
            Command::Auto(side) => self.set_player(side, PlayerKind::Ai),
            Command::Manual(side) => self.set_player(side, PlayerKind::Human),
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Take back the last ply. Against the engine, its reply is taken back
    /// too so the human is to move again.
    fn undo(&mut self) {
        self.board.undo();
        let turn = self.board.turn();
        if self.board.move_count() > 0 && !self.is_manual(turn) && self.is_manual(turn.opponent())
        {
            self.board.undo();
        }
        self.announced = false;
    }

    fn set_player(&mut self, side: Side, kind: PlayerKind) {
        info!(%side, ?kind, "player changed");
        let player = make_player(kind, &self.config);
        match side {
            Side::Attacker => self.black = player,
            Side::Defender => self.white = player,
        }
    }

    fn announce_winner(&mut self) -> Result<()> {
        if self.announced {
            return Ok(());
        }
        if let Some(winner) = self.board.winner() {
            info!(%winner, moves = self.board.move_count(), "game over");
            writeln!(self.output, "* {winner} wins.")?;
            self.announced = true;
        }
        Ok(())
    }
}

fn new_board(config: &GameConfig) -> Result<Board> {
    let mut board = Board::new();
    if let Some(limit) = config.move_limit {
        board.set_move_limit(limit)?;
    }
    Ok(board)
}

fn make_player(kind: PlayerKind, config: &GameConfig) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new()),
        PlayerKind::Ai => Box::new(AiPlayer::new(config.engine())),
    }
}

fn report(err: &TablutError) {
    debug!(%err, "rejected command");
    eprintln!("error: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn config(white: PlayerKind, black: PlayerKind) -> GameConfig {
        GameConfig {
            white,
            black,
            depth: Some(1),
            ..GameConfig::default()
        }
    }

    fn play(config: GameConfig, script: &str) -> (Option<Side>, String, Board) {
        let mut output = Vec::new();
        let mut game = Game::new(config, &mut output).unwrap();
        let winner = game.run(&mut Cursor::new(script)).unwrap();
        let board = game.board().clone();
        drop(game);
        (winner, String::from_utf8(output).unwrap(), board)
    }

    #[test]
    fn test_manual_moves() {
        let (winner, output, board) = play(
            config(PlayerKind::Human, PlayerKind::Human),
            "h5-6\ne7-f\n",
        );
        assert_eq!(winner, None);
        assert_eq!(output, "");
        assert_eq!(board.move_count(), 2);
        assert_eq!(board.turn(), Side::Attacker);
    }

    #[test]
    fn test_bad_input_is_skipped() {
        let (_, _, board) = play(
            config(PlayerKind::Human, PlayerKind::Human),
            "fly away\ne7-f\nh5-6\nlimit 0\n",
        );
        // e7-f is not Black's move; limit 0 is below the moves played
        assert_eq!(board.move_count(), 1);
        assert_eq!(board.move_limit(), crate::board::board::DEFAULT_MOVE_LIMIT);
    }

    #[test]
    fn test_repetition_announced() {
        let (winner, output, _) = play(
            config(PlayerKind::Human, PlayerKind::Human),
            "h5-6\ne7-f\nh6-5\nf7-e\ne7-f\nquit\n",
        );
        assert_eq!(winner, Some(Side::Attacker));
        // Announced once, and further moves are refused
        assert_eq!(output, "* Black wins.\n");
    }

    #[test]
    fn test_move_limit_from_config() {
        let config = GameConfig {
            move_limit: Some(2),
            ..config(PlayerKind::Human, PlayerKind::Human)
        };
        let (winner, output, _) = play(config, "h5-6\ne7-f\nh6-5\nf7-g\nh5-6\n");
        assert_eq!(winner, Some(Side::Defender));
        assert_eq!(output, "* White wins.\n");
    }

    #[test]
    fn test_engine_replies() {
        let (_, output, board) = play(config(PlayerKind::Ai, PlayerKind::Human), "h5-6\n");
        assert_eq!(board.move_count(), 2);
        assert!(output.starts_with("* "));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_undo_against_engine() {
        let (_, _, board) = play(config(PlayerKind::Ai, PlayerKind::Human), "h5-6\nundo\n");
        // Both the engine's reply and the human move are taken back
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.encoded(), Board::new().encoded());
    }

    #[test]
    fn test_dump_and_new() {
        let (_, output, board) = play(
            config(PlayerKind::Human, PlayerKind::Human),
            "h5-6\nnew\ndump\n",
        );
        assert_eq!(board.move_count(), 0);
        assert!(output.starts_with("===\n"));
        assert!(output.ends_with("===\n"));
        assert!(output.contains(" B B W W K W W B B\n"));
    }

    #[test]
    fn test_switch_to_auto() {
        let (_, output, board) = play(
            config(PlayerKind::Human, PlayerKind::Human),
            "auto black\nmanual black\n",
        );
        // Black's engine plays once before White reads the next line
        assert_eq!(board.move_count(), 1);
        assert_eq!(output.lines().count(), 1);
    }
}
