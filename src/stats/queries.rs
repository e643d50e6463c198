//! Read-only views over achievements and stats for dashboards

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::achievements::{
    Achievement, AchievementCategory, AchievementId, AchievementRecord,
};
use super::models::{AchievementProgress, DailyStats, MiningStats};
use super::time_bucket::trailing_days;

pub fn unlocked_achievements(
    records: &BTreeMap<AchievementId, AchievementRecord>,
) -> Vec<&AchievementRecord> {
    records.values().filter(|r| r.is_unlocked()).collect()
}

pub fn locked_achievements(
    records: &BTreeMap<AchievementId, AchievementRecord>,
) -> Vec<&AchievementRecord> {
    records.values().filter(|r| !r.is_unlocked()).collect()
}

pub fn achievements_by_category(
    records: &BTreeMap<AchievementId, AchievementRecord>,
    category: AchievementCategory,
) -> Vec<&AchievementRecord> {
    records
        .values()
        .filter(|r| r.definition.category == category)
        .collect()
}

/// Count unlocked records. Percentage is rounded, 0 for an empty set.
pub fn achievement_progress<'a>(
    records: impl IntoIterator<Item = &'a AchievementRecord>,
) -> AchievementProgress {
    let (total, unlocked) = records.into_iter().fold((0, 0), |(total, unlocked), r| {
        (total + 1, unlocked + usize::from(r.is_unlocked()))
    });
    let percentage = if total > 0 {
        (unlocked as f64 / total as f64 * 100.0).round() as u32
    } else {
        0
    };

    AchievementProgress {
        total,
        unlocked,
        percentage,
    }
}

/// Current value of the stat an achievement is measured against.
///
/// `None` for achievements that are only unlocked externally.
pub fn progress_value(id: AchievementId, stats: &MiningStats) -> Option<f64> {
    Achievement::get(id)
        .family
        .map(|family| family.stat_value(stats))
}

/// Completion towards the requirement as a percentage in `0..=100`
pub fn completion_percent(record: &AchievementRecord, stats: &MiningStats) -> f64 {
    if record.is_unlocked() {
        return 100.0;
    }
    let Some(value) = progress_value(record.id(), stats) else {
        return 0.0;
    };
    (value / record.definition.requirement * 100.0).clamp(0.0, 100.0)
}

/// The last `days` calendar days ending today, oldest first
pub fn recent_daily_stats(
    stats: &MiningStats,
    today: NaiveDate,
    days: u32,
) -> Vec<(NaiveDate, Option<&DailyStats>)> {
    trailing_days(today, days)
        .into_iter()
        .map(|day| (day, stats.daily_stats.get(&day)))
        .collect()
}

/// Recorded days, newest first
pub fn recent_history(stats: &MiningStats, limit: usize) -> Vec<&DailyStats> {
    stats.daily_stats.values().rev().take(limit).collect()
}
