//! Streak tracking system
//!
//! Tracks consecutive calendar days with at least one mining session.

use chrono::NaiveDate;

use crate::stats::models::MiningStats;
use crate::stats::time_bucket::days_between;

/// What a session did to the daily streak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakUpdate {
    /// First session ever recorded
    Started,
    /// A session was already counted today
    AlreadyCounted,
    /// Mined yesterday too; carries the new streak length
    Extended(u32),
    /// Gap of two or more days (or the clock went backwards)
    Reset,
}

impl StreakUpdate {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::AlreadyCounted => "already counted",
            Self::Extended(_) => "extended",
            Self::Reset => "reset",
        }
    }
}

/// Advance the streak for a session on `today`
pub fn update_streak(stats: &mut MiningStats, today: NaiveDate) -> StreakUpdate {
    let Some(last_day) = stats.last_mining_date else {
        stats.current_streak_days = 1;
        stats.longest_streak_days = stats.longest_streak_days.max(1);
        stats.last_mining_date = Some(today);
        return StreakUpdate::Started;
    };

    if last_day == today {
        return StreakUpdate::AlreadyCounted;
    }

    stats.last_mining_date = Some(today);
    if days_between(last_day, today) == 1 {
        let new_count = stats.current_streak_days.saturating_add(1);
        stats.current_streak_days = new_count;
        stats.longest_streak_days = stats.longest_streak_days.max(new_count);
        StreakUpdate::Extended(new_count)
    } else {
        stats.current_streak_days = 1;
        StreakUpdate::Reset
    }
}

/// Check if the streak is still alive (mined today or yesterday)
pub fn is_streak_active(stats: &MiningStats, today: NaiveDate) -> bool {
    let Some(last_day) = stats.last_mining_date else {
        return false;
    };
    (0..=1).contains(&days_between(last_day, today))
}
