//! xtm-achievements - Mining stats and achievements for the XTM miner
//!
//! Tracks what a miner has done over time and rewards it:
//!
//! 1. **Stats**: lifetime totals (shares, XTM, mining time, best hashrate,
//!    sessions) plus one bucket per calendar day.
//!
//! 2. **Achievements**: a fixed catalog of milestones unlocked as the stats
//!    cross thresholds, with a queue of fresh unlocks for toast notifications.
//!
//! 3. **Tracking**: a [`tracker::MiningTracker`] that turns raw miner and pool
//!    samples into stats updates.
//!
//! State is snapshotted after every change to a JSON file or SQLite database.

pub mod config;
pub mod stats;
pub mod tracker;

pub use config::Config;
pub use stats::{AchievementId, AchievementManager, MiningStats, SharedManager};
pub use tracker::{MiningEvent, MiningTracker};
