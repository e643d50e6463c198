//! Mining statistics and achievements for the XTM miner
//!
//! Aggregates mining activity into lifetime totals and per-day buckets, keeps
//! the daily streak, and unlocks achievements as thresholds are crossed. The
//! whole state is snapshotted after every change to a JSON file or a SQLite
//! database (`~/.xtm-achievements/`).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌─────────────────┐
//! │  MiningTracker  │     │      CLI        │
//! │ (backend events)│     │ (record/unlock) │
//! └────────┬────────┘     └────────┬────────┘
//!          │                       │
//!          └───────────┬───────────┘
//!                      ▼
//!            AchievementManager
//!     aggregator → streaks → checker → queue
//!                      │
//!                      ▼
//!             PersistenceGateway
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut manager = AchievementManager::new(PersistenceGateway::new(
//!     JsonFileBackend::new("achievements.json"),
//! ));
//!
//! manager.record_session();
//! let unlocked = manager.increment_shares(1);
//!
//! for id in manager.drain_recent_unlocks() {
//!     println!("Unlocked {}", id);
//! }
//! ```

pub mod achievements;
pub mod aggregator;
mod clock;
mod db;
mod models;
pub mod queries;
mod store;
mod time_bucket;

pub use achievements::{
    Achievement, AchievementCategory, AchievementId, AchievementManager, AchievementRarity,
    AchievementRecord, AchievementsState, SharedManager,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use db::SqliteBackend;
pub use models::{AchievementProgress, DailyStats, DailyStatsUpdate, MiningStats};
pub use store::{
    JsonFileBackend, MemoryBackend, PersistenceGateway, Snapshot, SnapshotBackend, StoreError,
    StoreResult,
};
pub use time_bucket::{day_bucket, days_between, trailing_days};

use anyhow::{Context, Result};

use crate::config::{StorageBackend, StorageSettings};

/// Open the snapshot backend described by the storage settings
pub fn open_gateway(storage: &StorageSettings) -> Result<PersistenceGateway> {
    let path = storage.snapshot_path();
    let gateway = match storage.backend {
        StorageBackend::Json => PersistenceGateway::new(JsonFileBackend::new(&path)),
        StorageBackend::Sqlite => {
            let backend = SqliteBackend::open(&path, &storage.record_name).with_context(|| {
                format!("Failed to open achievements database: {}", path.display())
            })?;
            PersistenceGateway::new(backend)
        }
    };

    tracing::debug!("Achievement snapshots stored at {}", gateway.describe());
    Ok(gateway)
}
