//! Data models for mining statistics
//!
//! These structures are persisted as part of the achievements snapshot.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifetime mining statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MiningStats {
    pub total_shares_submitted: u64,
    pub total_xtm_earned: f64,
    pub total_mining_seconds: u64,

    // Streaks (days)
    pub longest_streak_days: u32,
    pub current_streak_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_mining_date: Option<NaiveDate>,

    /// Best total hashrate ever observed (H/s)
    pub best_hashrate: f64,
    pub sessions_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_mining_date: Option<NaiveDate>,

    pub daily_stats: BTreeMap<NaiveDate, DailyStats>,
}

/// Activity accumulated over one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub date: NaiveDate,
    #[serde(default)]
    pub shares_submitted: u64,
    #[serde(default)]
    pub xtm_earned: f64,
    #[serde(default)]
    pub mining_seconds: u64,
    #[serde(default)]
    pub peak_hashrate: f64,
}

impl DailyStats {
    /// Zeroed bucket for a day
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            shares_submitted: 0,
            xtm_earned: 0.0,
            mining_seconds: 0,
            peak_hashrate: 0.0,
        }
    }

    pub fn has_mining_time(&self) -> bool {
        self.mining_seconds > 0
    }
}

/// Partial update merged into today's bucket.
///
/// Counters are added, `peak_hashrate` is maxed. Absent fields leave the
/// bucket untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyStatsUpdate {
    pub shares_submitted: Option<u64>,
    pub xtm_earned: Option<f64>,
    pub mining_seconds: Option<u64>,
    pub peak_hashrate: Option<f64>,
}

impl DailyStatsUpdate {
    pub fn shares(count: u64) -> Self {
        Self {
            shares_submitted: Some(count),
            ..Self::default()
        }
    }

    pub fn earnings(xtm: f64) -> Self {
        Self {
            xtm_earned: Some(xtm),
            ..Self::default()
        }
    }

    pub fn mining_time(seconds: u64) -> Self {
        Self {
            mining_seconds: Some(seconds),
            ..Self::default()
        }
    }

    pub fn peak_hashrate(hashrate: f64) -> Self {
        Self {
            peak_hashrate: Some(hashrate),
            ..Self::default()
        }
    }
}

/// Progress summary shown in the achievements header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AchievementProgress {
    pub total: usize,
    pub unlocked: usize,
    /// Rounded to the nearest whole percent
    pub percentage: u32,
}
