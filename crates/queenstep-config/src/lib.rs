//! Configuration system for queenstep.
//!
//! Load replay configuration from TOML or YAML to choose the board size,
//! the search strategy and how far to replay without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use queenstep_config::ReplayConfig;
//! use queenstep_core::SearchStrategy;
//!
//! let config = ReplayConfig::from_toml_str(r#"
//!     size = 6
//!     strategy = "best_first"
//!     stop_at_first = false
//!     step_limit = 500
//! "#).unwrap();
//!
//! assert_eq!(config.board_size().unwrap().get(), 6);
//! assert_eq!(config.strategy, SearchStrategy::BestFirst);
//! assert_eq!(config.step_limit, Some(500));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use queenstep_config::ReplayConfig;
//!
//! let config = ReplayConfig::load("replay.toml").unwrap_or_default();
//! assert_eq!(config.size, 8);
//! ```

use std::path::Path;

use queenstep_core::{BoardSize, QueensError, SearchStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Queens(#[from] QueensError),
}

fn default_size() -> i64 {
    8
}

fn default_stop_at_first() -> bool {
    true
}

/// Replay configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ReplayConfig {
    /// Board dimension. Signed so that non-positive values are reported
    /// as configuration errors rather than parse errors.
    #[serde(default = "default_size")]
    pub size: i64,

    /// Search strategy producing the events.
    #[serde(default)]
    pub strategy: SearchStrategy,

    /// Whether the search ends after its first solution.
    #[serde(default = "default_stop_at_first")]
    pub stop_at_first: bool,

    /// Maximum number of events to replay (None = until terminal).
    #[serde(default)]
    pub step_limit: Option<u64>,

    /// `tracing` filter directive, e.g. `"queenstep_solver=debug"`.
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            strategy: SearchStrategy::default(),
            stop_at_first: default_stop_at_first(),
            step_limit: None,
            log_filter: None,
        }
    }
}

impl ReplayConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, anything else as
    /// TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, fails to parse or names a
    /// non-positive board size.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the board size.
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    /// Sets the search strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets whether to stop after the first solution.
    pub fn with_stop_at_first(mut self, stop_at_first: bool) -> Self {
        self.stop_at_first = stop_at_first;
        self
    }

    /// Sets the step limit.
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Returns the validated board size.
    pub fn board_size(&self) -> Result<BoardSize, ConfigError> {
        Ok(BoardSize::try_from(self.size)?)
    }

    /// Checks the configuration for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board_size()?;
        if self.step_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "step_limit must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
