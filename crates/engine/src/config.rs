//! Console configuration via `consolemock.toml`
//!
//! Every setting has a default, so a missing or empty file yields a console
//! seeded with the fixture data and a fresh random seed.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "consolemock.toml";

/// Log levels accepted in `log_level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Errors from loading or saving a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or written
    #[error("failed to access config file '{}': {source}", path.display())]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not valid TOML for this config
    #[error("failed to parse config file '{}': {reason}", path.display())]
    Parse {
        /// File path
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// The config could not be rendered as TOML
    #[error("failed to serialize config: {0}")]
    Serialize(String),

    /// A setting holds an unusable value
    #[error("invalid log level '{0}', expected one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Console configuration loaded from `consolemock.toml`.
///
/// # Example
///
/// ```toml
/// # Fixed seed for reproducible ids, timestamps and metrics
/// rng_seed = 42
/// seed_fixtures = true
/// log_level = "debug"
/// creation_skew_days = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Seed for the random source. `None` seeds from the OS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
    /// Load the fixture namespaces' address spaces, addresses, connections and links.
    #[serde(default = "default_seed_fixtures")]
    pub seed_fixtures: bool,
    /// Log filter level used by the CLI.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Upper bound, in days, of how far in the past creation timestamps fall.
    #[serde(default = "default_creation_skew_days")]
    pub creation_skew_days: u32,
}

fn default_seed_fixtures() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_creation_skew_days() -> u32 {
    3
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            seed_fixtures: default_seed_fixtures(),
            log_level: default_log_level(),
            creation_skew_days: default_creation_skew_days(),
        }
    }
}

impl ConsoleConfig {
    /// Check every setting.
    ///
    /// # Errors
    ///
    /// Returns an error if `log_level` is not a known level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Console mock configuration
#
# Seed for ids, timestamps and synthetic metrics.
# Leave unset for a different run every start.
# rng_seed = 42

# Load the fixture address spaces, addresses, connections and links (default: true)
seed_fixtures = true

# Log level: trace, debug, info, warn or error (default: "info")
log_level = "info"

# Creation timestamps fall up to this many days in the past (default: 3)
creation_skew_days = 3
"#
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: ConsoleConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
