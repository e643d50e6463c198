//! Achievement checking logic
//!
//! Compares live stats against catalog requirements and unlocks every family
//! tier whose threshold is met.

use std::collections::BTreeMap;

use super::definitions::{AchievementFamily, AchievementId};
use super::notifications::NotificationQueue;
use super::records::AchievementRecord;
use crate::stats::models::MiningStats;

/// Check one family, lowest tier first. Returns ids unlocked by this call.
pub fn check_family_achievements(
    family: AchievementFamily,
    stats: &MiningStats,
    records: &mut BTreeMap<AchievementId, AchievementRecord>,
    now_ms: i64,
    queue: &mut NotificationQueue,
) -> Vec<AchievementId> {
    let value = family.stat_value(stats);
    let mut newly_unlocked = Vec::new();

    for definition in family.members() {
        let Some(record) = records.get_mut(&definition.id) else {
            continue;
        };
        if record.is_unlocked() {
            continue;
        }

        record.progress = value.min(definition.requirement);
        if value >= definition.requirement {
            record.unlocked_at = Some(now_ms);
            queue.enqueue(definition.id);
            newly_unlocked.push(definition.id);
        }
    }

    newly_unlocked
}

/// Check every family. Already unlocked achievements are never touched.
pub fn check_achievements(
    stats: &MiningStats,
    records: &mut BTreeMap<AchievementId, AchievementRecord>,
    now_ms: i64,
    queue: &mut NotificationQueue,
) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();
    for family in AchievementFamily::ALL {
        newly_unlocked.extend(check_family_achievements(
            family, stats, records, now_ms, queue,
        ));
    }
    newly_unlocked
}

/// Unlock a single achievement regardless of stats.
///
/// Returns `false` if it was already unlocked.
pub fn unlock_achievement(
    id: AchievementId,
    records: &mut BTreeMap<AchievementId, AchievementRecord>,
    now_ms: i64,
    queue: &mut NotificationQueue,
) -> bool {
    let Some(record) = records.get_mut(&id) else {
        return false;
    };
    if record.is_unlocked() {
        return false;
    }

    record.unlocked_at = Some(now_ms);
    record.progress = record.definition.requirement;
    queue.enqueue(id);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::achievements::records::merge_with_catalog;

    fn fresh() -> BTreeMap<AchievementId, AchievementRecord> {
        merge_with_catalog(&BTreeMap::new())
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut records = fresh();
        let mut queue = NotificationQueue::new();
        let stats = MiningStats {
            total_shares_submitted: 100,
            ..MiningStats::default()
        };

        let unlocked = check_achievements(&stats, &mut records, 10, &mut queue);
        assert_eq!(
            unlocked,
            vec![AchievementId::FirstShare, AchievementId::CenturyClub]
        );
        assert_eq!(queue.drain(), unlocked);
        assert_eq!(records[&AchievementId::ThousandShares].progress, 100.0);
    }

    #[test]
    fn test_second_check_unlocks_nothing() {
        let mut records = fresh();
        let mut queue = NotificationQueue::new();
        let stats = MiningStats {
            sessions_count: 10,
            best_hashrate: 1_500.0,
            ..MiningStats::default()
        };

        let first = check_achievements(&stats, &mut records, 10, &mut queue);
        assert_eq!(first.len(), 3);

        let second = check_achievements(&stats, &mut records, 20, &mut queue);
        assert!(second.is_empty());
        assert_eq!(queue.len(), 3);
        assert_eq!(records[&AchievementId::TenSessions].unlocked_at, Some(10));
    }

    #[test]
    fn test_each_tier_checked_independently() {
        let mut records = fresh();
        let mut queue = NotificationQueue::new();
        // Lower tier already unlocked by an earlier run, higher tier now due
        records
            .get_mut(&AchievementId::FirstHour)
            .unwrap()
            .unlocked_at = Some(1);
        let stats = MiningStats {
            total_mining_seconds: 86_400,
            ..MiningStats::default()
        };

        let unlocked = check_achievements(&stats, &mut records, 50, &mut queue);
        assert_eq!(unlocked, vec![AchievementId::DayMiner]);
        assert_eq!(records[&AchievementId::FirstHour].unlocked_at, Some(1));
    }

    #[test]
    fn test_streak_uses_longest_not_current() {
        let mut records = fresh();
        let mut queue = NotificationQueue::new();
        let stats = MiningStats {
            current_streak_days: 1,
            longest_streak_days: 7,
            ..MiningStats::default()
        };

        let unlocked = check_achievements(&stats, &mut records, 1, &mut queue);
        assert_eq!(unlocked, vec![AchievementId::Streak3, AchievementId::Streak7]);
    }

    #[test]
    fn test_earnings_micro_threshold() {
        let mut records = fresh();
        let mut queue = NotificationQueue::new();
        let stats = MiningStats {
            total_xtm_earned: 0.000_001,
            ..MiningStats::default()
        };

        let unlocked = check_achievements(&stats, &mut records, 1, &mut queue);
        assert_eq!(unlocked, vec![AchievementId::FirstXtm]);
    }

    #[test]
    fn test_performance_mode_only_unlocks_explicitly() {
        let mut records = fresh();
        let mut queue = NotificationQueue::new();
        let stats = MiningStats {
            total_shares_submitted: u64::MAX,
            best_hashrate: f64::MAX,
            total_mining_seconds: u64::MAX,
            longest_streak_days: u32::MAX,
            total_xtm_earned: f64::MAX,
            sessions_count: u64::MAX,
            ..MiningStats::default()
        };

        let unlocked = check_achievements(&stats, &mut records, 1, &mut queue);
        assert_eq!(unlocked.len(), records.len() - 1);
        assert!(!records[&AchievementId::PerformanceMode].is_unlocked());

        assert!(unlock_achievement(
            AchievementId::PerformanceMode,
            &mut records,
            2,
            &mut queue
        ));
        assert!(!unlock_achievement(
            AchievementId::PerformanceMode,
            &mut records,
            3,
            &mut queue
        ));
        assert_eq!(records[&AchievementId::PerformanceMode].unlocked_at, Some(2));
    }
}
