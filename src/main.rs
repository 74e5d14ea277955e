//! Console front-end: play tic-tac-toe, Connect Four, or sticks against
//! the minimax engine.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rust_minimax::core::PlayerId;
use rust_minimax::games::GameKind;
use rust_minimax::session::{Arcade, SessionConfig};

#[derive(Parser, Debug)]
#[command(name = "rust-minimax")]
#[command(version, about = "Play small board games against a minimax engine", long_about = None)]
struct Cli {
    /// Play a single game and exit instead of showing the menu
    #[arg(long, short = 'g', value_enum)]
    game: Option<GameKind>,

    /// Random seed for the starting-player coin flip
    #[arg(long)]
    seed: Option<u64>,

    /// You always move first
    #[arg(long, conflicts_with = "computer_first")]
    human_first: bool,

    /// The computer always moves first
    #[arg(long)]
    computer_first: bool,

    /// Search depth cutoff for the chosen game (requires --game)
    #[arg(long, short = 'd', requires = "game", value_parser = clap::value_parser!(u32).range(1..))]
    depth: Option<u32>,

    /// Starting number of sticks for the sticks game (1-30)
    #[arg(long)]
    sticks: Option<usize>,

    /// JSON session configuration file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Log search details to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    /// Config file (or defaults) with command-line flags layered on top.
    fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => SessionConfig::default(),
        };

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.human_first {
            config = config.with_first_player(PlayerId::Human);
        }
        if self.computer_first {
            config = config.with_first_player(PlayerId::Computer);
        }
        if let Some(sticks) = self.sticks {
            config = config.with_initial_sticks(sticks);
        }
        if let (Some(kind), Some(depth)) = (self.game, self.depth) {
            config = config.with_max_depth(kind, depth);
        }

        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.session_config()?;
    let mut arcade = Arcade::new(config, io::stdin().lock(), io::stdout().lock())
        .context("invalid session configuration")?;

    match cli.game {
        Some(kind) => {
            arcade.play(kind).with_context(|| format!("playing {}", kind))?;
        }
        None => {
            let played = arcade.run().context("running the game menu")?;
            tracing::info!(games = played.len(), "session finished");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_layer_over_defaults() {
        let cli = Cli::parse_from([
            "rust-minimax",
            "--game",
            "connect-four",
            "--depth",
            "4",
            "--seed",
            "7",
            "--computer-first",
        ]);
        let config = cli.session_config().unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.first_player, Some(PlayerId::Computer));
        assert_eq!(config.max_depth_for(GameKind::ConnectFour), Some(4));
        assert_eq!(config.max_depth_for(GameKind::TicTacToe), None);
    }

    #[test]
    fn test_conflicting_first_player_flags() {
        let parsed = Cli::try_parse_from(["rust-minimax", "--human-first", "--computer-first"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_depth_requires_game() {
        let parsed = Cli::try_parse_from(["rust-minimax", "--depth", "3"]);
        assert!(parsed.is_err());
    }
}
