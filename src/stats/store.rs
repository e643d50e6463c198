//! Snapshot persistence for achievements and stats
//!
//! The whole state is written as one JSON document after every mutation:
//!
//! ```text
//! { "achievements": { "<id>": { ...record } }, "stats": { ...MiningStats } }
//! ```
//!
//! Backends only move that document around. Failures never reach callers:
//! the gateway logs them and carries on as if there was no prior state.

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use super::achievements::{AchievementId, AchievementRecord, AchievementsState, StoredProgress};
use super::models::MiningStats;

/// Errors raised by snapshot backends
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("could not lock snapshot file {path}: {source}")]
    Lock {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable home of the serialized snapshot
pub trait SnapshotBackend: Send {
    /// Read the last written document, `None` if nothing was ever written
    fn read(&self) -> StoreResult<Option<String>>;

    /// Replace the stored document
    fn write(&self, body: &str) -> StoreResult<()>;

    /// Human readable location, for logs
    fn describe(&self) -> String;
}

/// Persisted state as read back from a backend
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub achievements: BTreeMap<String, StoredProgress>,
    #[serde(default)]
    pub stats: MiningStats,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    achievements: &'a BTreeMap<AchievementId, AchievementRecord>,
    stats: &'a MiningStats,
}

/// Serializes state into a backend and reads it back
pub struct PersistenceGateway {
    backend: Box<dyn SnapshotBackend>,
}

impl PersistenceGateway {
    pub fn new(backend: impl SnapshotBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Load the last snapshot. Missing or unreadable snapshots yield `None`.
    pub fn load(&self) -> Option<Snapshot> {
        let body = match self.backend.read() {
            Ok(Some(body)) => body,
            Ok(None) => {
                tracing::debug!("No snapshot at {}", self.backend.describe());
                return None;
            }
            Err(e) => {
                tracing::warn!("Failed to read snapshot from {}: {}", self.backend.describe(), e);
                return None;
            }
        };

        match serde_json::from_str::<Snapshot>(&body) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable snapshot at {}: {}",
                    self.backend.describe(),
                    e
                );
                None
            }
        }
    }

    /// Overwrite the stored snapshot with `state`. Errors are logged only.
    pub fn save(&self, state: &AchievementsState) {
        let snapshot = SnapshotRef {
            achievements: &state.achievements,
            stats: &state.stats,
        };
        let result = serde_json::to_string(&snapshot)
            .map_err(StoreError::from)
            .and_then(|body| self.backend.write(&body));

        if let Err(e) = result {
            tracing::warn!("Failed to save snapshot to {}: {}", self.backend.describe(), e);
        }
    }

    pub fn describe(&self) -> String {
        self.backend.describe()
    }
}

/// Snapshot kept in a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotBackend for JsonFileBackend {
    fn read(&self) -> StoreResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Exclusive lock, write to a temp file, then rename over the old snapshot
    fn write(&self, body: &str) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let lock_path = self.path.with_extension("json.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)?;
        lock_file.lock_exclusive().map_err(|source| StoreError::Lock {
            path: lock_path.clone(),
            source,
        })?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        temp_file.write_all(body.as_bytes())?;
        temp_file.sync_all()?;

        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-process snapshot; clones share the same slot.
///
/// Useful for tests and for embedding without touching disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that starts out holding `body`
    pub fn with_contents(body: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(body.into()))),
        }
    }

    /// Last written document
    pub fn contents(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SnapshotBackend for MemoryBackend {
    fn read(&self) -> StoreResult<Option<String>> {
        Ok(self.contents())
    }

    fn write(&self, body: &str) -> StoreResult<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(body.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
