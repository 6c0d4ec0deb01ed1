//! Game configuration loaded from TOML and command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Smallest board size the console accepts.
pub const MIN_BOARD_SIZE: usize = 4;

/// Largest board size the console accepts. The board holds n⁴ cells.
pub const MAX_BOARD_SIZE: usize = 32;

/// Settings for one console game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board size n. The player is prompted when absent.
    #[serde(default)]
    size: Option<usize>,

    /// Seed for active-grid selection. A random seed is used when absent.
    #[serde(default)]
    seed: Option<u64>,
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(size: Option<usize>, seed: Option<u64>) -> Self {
        Self { size, seed }
    }

    /// Loads configuration from TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it
    /// names a board size outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if let Some(size) = config.size {
            validate_size(size)?;
        }

        info!(size = ?config.size, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces settings with any values given on the command line.
    #[instrument(skip(self))]
    pub fn with_overrides(self, size: Option<usize>, seed: Option<u64>) -> Self {
        Self {
            size: size.or(self.size),
            seed: seed.or(self.seed),
        }
    }
}

/// Checks that a board size is playable.
///
/// # Errors
///
/// Returns an error for sizes of 3 or less, or above [`MAX_BOARD_SIZE`].
#[track_caller]
#[instrument]
pub fn validate_size(size: usize) -> Result<(), ConfigError> {
    if size < MIN_BOARD_SIZE {
        return Err(ConfigError::new(format!(
            "Board size must be greater than 3, got {}",
            size
        )));
    }
    if size > MAX_BOARD_SIZE {
        return Err(ConfigError::new(format!(
            "Board size must be at most {}, got {}",
            MAX_BOARD_SIZE, size
        )));
    }
    Ok(())
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = GameConfig::new(Some(5), Some(1)).with_overrides(Some(6), None);
        assert_eq!(config.size(), &Some(6));
        assert_eq!(config.seed(), &Some(1));
    }

    #[test]
    fn test_validate_size_boundary() {
        assert!(validate_size(3).is_err());
        assert!(validate_size(4).is_ok());
        assert!(validate_size(MAX_BOARD_SIZE).is_ok());
        let err = validate_size(2000).expect_err("too large");
        assert!(err.message.contains("at most 32"));
    }
}
