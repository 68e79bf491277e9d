//! Engine configuration.

use crate::ai::DEFAULT_RANDOM_MOVE_PROBABILITY;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Tunables for a game engine.
///
/// Every field has a default, so an empty TOML file is a valid config.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct EngineConfig {
    /// Pause before the computer answers, in milliseconds.
    think_delay_ms: u64,

    /// Chance that the computer plays a random empty cell instead of searching.
    random_move_probability: f64,

    /// Seed for the computer's randomness. `None` lets the host pick one.
    #[setters(strip_option)]
    seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: 150,
            random_move_probability: DEFAULT_RANDOM_MOVE_PROBABILITY,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            think_delay_ms = config.think_delay_ms,
            random_move_probability = config.random_move_probability,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.random_move_probability) {
            return Err(ConfigError::new(format!(
                "random_move_probability must be within [0, 1], got {}",
                self.random_move_probability
            )));
        }
        Ok(())
    }

    /// Thinking pause as a [`Duration`].
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
