//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Config;

/// Snapshot storage backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON document on disk
    #[default]
    Json,
    /// A row in a SQLite database
    Sqlite,
}

impl StorageBackend {
    fn default_file_name(&self) -> &'static str {
        match self {
            StorageBackend::Json => "achievements.json",
            StorageBackend::Sqlite => "achievements.db",
        }
    }
}

/// Storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Snapshot location. Defaults to a file in the global config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Name of the snapshot record (the row key for SQLite)
    #[serde(default = "default_record_name")]
    pub record_name: String,
}

impl StorageSettings {
    /// Resolved location of the snapshot file or database
    pub fn snapshot_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| Config::global_config_dir().join(self.backend.default_file_name()))
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: None,
            record_name: default_record_name(),
        }
    }
}

/// Mining tracker settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerSettings {
    /// Seconds between mining time ticks while any hardware is mining
    #[serde(default = "default_tick_interval_secs")]
    pub tick_interval_secs: u64,

    /// Micro-units per XTM in reported earnings
    #[serde(default = "default_earnings_divisor")]
    pub earnings_divisor: f64,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            tick_interval_secs: default_tick_interval_secs(),
            earnings_divisor: default_earnings_divisor(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter used when `RUST_LOG` is not set and `--verbose` is off
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_record_name() -> String {
    "tari-achievements".to_string()
}

fn default_tick_interval_secs() -> u64 {
    10
}

fn default_earnings_divisor() -> f64 {
    1_000_000.0
}

fn default_log_level() -> String {
    "info".to_string()
}
