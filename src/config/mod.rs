//! Configuration loading and management

mod io;
mod settings;

pub use settings::{LoggingSettings, StorageBackend, StorageSettings, TrackerSettings};

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where achievement snapshots are kept
    #[serde(default)]
    pub storage: StorageSettings,

    /// Mining activity tracking
    #[serde(default)]
    pub tracker: TrackerSettings,

    /// Log output
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise from the global config.
    ///
    /// A missing file yields the defaults; a file that exists but does not
    /// parse is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let global_path = Self::global_config_path();
        let path = path.unwrap_or(&global_path);

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::from_file(path)
    }
}
