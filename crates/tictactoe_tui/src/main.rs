//! tictactoe - terminal tic-tac-toe with move history

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_tui::{Cli, Command, TuiConfig, logging, replay, terminal};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    // The config names the log target, so events start after it is loaded.
    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            logging::init_file(config.log())?;
            info!(config = %cli.config.display(), "Config loaded");
            terminal::run(&config)
        }
        Command::Replay { cells, json } => {
            logging::init_stderr(config.log());
            info!(config = %cli.config.display(), "Config loaded");
            replay::run(&cells, json, &mut std::io::stdout().lock())
        }
    }
}
