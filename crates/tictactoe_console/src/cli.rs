//! Command-line interface for the console game.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::EngineConfig;
use tracing::{debug, instrument};

/// Play tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before the computer answers, in milliseconds
    #[arg(long)]
    pub think_delay_ms: Option<u64>,

    /// Chance (0-1) that the computer plays a random cell instead of searching
    #[arg(long)]
    pub random_move_probability: Option<f64>,

    /// Print engine events as JSON lines instead of drawing the board
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Builds the engine config: file values first, then flag overrides.
    #[instrument(skip(self), fields(config = ?self.config))]
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => EngineConfig::default(),
        };

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(delay) = self.think_delay_ms {
            config = config.with_think_delay_ms(delay);
        }
        if let Some(p) = self.random_move_probability {
            config = config.with_random_move_probability(p);
        }
        config.validate().context("Invalid command-line override")?;

        debug!(?config, "Resolved engine config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--seed",
            "4",
            "--think-delay-ms",
            "0",
            "--random-move-probability",
            "0",
        ]);
        let config = cli.engine_config().unwrap();
        assert_eq!(*config.seed(), Some(4));
        assert_eq!(*config.think_delay_ms(), 0);
        assert_eq!(*config.random_move_probability(), 0.0);
    }

    #[test]
    fn test_bad_probability_rejected() {
        let cli = Cli::parse_from(["tictactoe", "--random-move-probability", "2"]);
        assert!(cli.engine_config().is_err());
    }

    #[test]
    fn test_missing_config_file_rejected() {
        let cli = Cli::parse_from(["tictactoe", "--config", "/nonexistent/tictactoe.toml"]);
        assert!(cli.engine_config().is_err());
    }
}
