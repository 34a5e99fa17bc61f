//! Tablut on the terminal
//!
//! Reads moves and commands from stdin and writes the game transcript to
//! stdout. Logs go to stderr.

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tablut::config::{Cli, GameConfig};
use tablut::game::Game;
use tablut::TablutError;

fn main() -> Result<(), TablutError> {
    let config = GameConfig::from(Cli::parse());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut game = Game::new(config, io::stdout().lock())?;
    game.run(&mut input)?;
    Ok(())
}
