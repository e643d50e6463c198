//! Achievement Manager - Core gamification logic
//!
//! Owns the state container, runs the aggregator, streak and unlock steps in
//! order for every event, and snapshots the result after each mutation.

use std::sync::{Arc, Mutex};

use super::checker;
use super::definitions::{AchievementCategory, AchievementId};
use super::records::{merge_with_catalog, stored_progress, AchievementRecord};
use super::state::{AchievementsState, StateContainer};
use super::streaks::{self, StreakUpdate};
use crate::stats::aggregator;
use crate::stats::clock::{Clock, SystemClock};
use crate::stats::models::{AchievementProgress, DailyStatsUpdate, MiningStats};
use crate::stats::queries;
use crate::stats::store::PersistenceGateway;

/// Manager shared between the tracker and its ticker task
pub type SharedManager = Arc<Mutex<AchievementManager>>;

/// Main manager for all achievement features
pub struct AchievementManager {
    state: StateContainer,
    persistence: PersistenceGateway,
    clock: Arc<dyn Clock>,
}

impl AchievementManager {
    /// Load the last snapshot and merge it with the catalog
    pub fn new(persistence: PersistenceGateway) -> Self {
        Self::with_clock(persistence, Arc::new(SystemClock))
    }

    pub fn with_clock(persistence: PersistenceGateway, clock: Arc<dyn Clock>) -> Self {
        let snapshot = persistence.load().unwrap_or_default();
        let state = AchievementsState {
            achievements: merge_with_catalog(&snapshot.achievements),
            stats: snapshot.stats,
            ..AchievementsState::default()
        };

        let mut manager = Self {
            state: StateContainer::new(state),
            persistence,
            clock,
        };
        manager.initialize_achievements();
        manager
    }

    /// Wrap for sharing with a tracker
    pub fn into_shared(self) -> SharedManager {
        Arc::new(Mutex::new(self))
    }

    // ========================================
    // INITIALIZATION
    // ========================================

    /// Re-merge current records with the catalog. Safe to call repeatedly.
    pub fn initialize_achievements(&mut self) {
        self.state.update(|state| {
            state.achievements = merge_with_catalog(&stored_progress(&state.achievements));
            state.initialized = true;
        });
        self.persist();

        let progress = self.progress();
        tracing::debug!(
            "Achievements initialized: {} of {} unlocked",
            progress.unlocked,
            progress.total
        );
    }

    pub fn is_initialized(&self) -> bool {
        self.state.get().initialized
    }

    // ========================================
    // STATS AGGREGATION
    // ========================================

    /// Add accepted shares
    pub fn increment_shares(&mut self, count: u64) -> Vec<AchievementId> {
        self.mutate_stats(|stats, _| aggregator::add_shares(stats, count))
    }

    /// Add earned XTM
    pub fn add_earnings(&mut self, amount: f64) -> Vec<AchievementId> {
        self.mutate_stats(|stats, _| aggregator::add_earnings(stats, amount))
    }

    /// Add active mining seconds
    pub fn add_mining_time(&mut self, seconds: u64) -> Vec<AchievementId> {
        self.mutate_stats(|stats, _| aggregator::add_mining_time(stats, seconds))
    }

    /// Record a hashrate sample; only a new best changes anything
    pub fn update_hashrate(&mut self, hashrate: f64) -> Vec<AchievementId> {
        self.mutate_stats(|stats, _| aggregator::observe_hashrate(stats, hashrate))
    }

    /// Count a mining session, advance the daily streak, then check unlocks
    pub fn record_session(&mut self) -> Vec<AchievementId> {
        let mut streak = StreakUpdate::AlreadyCounted;
        let unlocked = self.mutate_stats(|stats, today| {
            aggregator::start_session(stats, today);
            streak = streaks::update_streak(stats, today);
            true
        });

        let stats = &self.state.get().stats;
        tracing::info!(
            "Mining session #{} recorded (streak {}: {} days, best {})",
            stats.sessions_count,
            streak.label(),
            stats.current_streak_days,
            stats.longest_streak_days
        );
        unlocked
    }

    /// Merge into today's daily bucket. Daily stats never unlock anything.
    pub fn record_daily_stats(&mut self, update: DailyStatsUpdate) {
        let today = self.clock.today();
        let changed = self
            .state
            .update(|state| aggregator::merge_daily(&mut state.stats, today, &update));
        if changed {
            self.persist();
        }
    }

    // ========================================
    // UNLOCKS
    // ========================================

    /// Check every family against current stats, unlocking what is due
    pub fn check_achievements(&mut self) -> Vec<AchievementId> {
        let unlocked = self.run_checks();
        if !unlocked.is_empty() {
            self.persist();
        }
        unlocked
    }

    fn run_checks(&mut self) -> Vec<AchievementId> {
        let now = self.clock.now_ms();
        let unlocked = self.state.update(|state| {
            checker::check_achievements(
                &state.stats,
                &mut state.achievements,
                now,
                &mut state.recent_unlocks,
            )
        });
        self.log_unlocks(&unlocked);
        unlocked
    }

    /// Unlock an externally triggered achievement.
    ///
    /// Returns `false` if it was already unlocked.
    pub fn unlock_achievement(&mut self, id: AchievementId) -> bool {
        let now = self.clock.now_ms();
        let unlocked = self.state.update(|state| {
            checker::unlock_achievement(id, &mut state.achievements, now, &mut state.recent_unlocks)
        });
        if unlocked {
            self.log_unlocks(&[id]);
            self.persist();
        }
        unlocked
    }

    /// Unlock by string id; unknown ids are ignored
    pub fn unlock_achievement_by_name(&mut self, id: &str) -> bool {
        match AchievementId::parse(id) {
            Some(id) => self.unlock_achievement(id),
            None => {
                tracing::debug!("Ignoring unlock of unknown achievement '{}'", id);
                false
            }
        }
    }

    // ========================================
    // NOTIFICATIONS
    // ========================================

    /// Take every pending unlock notification
    pub fn drain_recent_unlocks(&mut self) -> Vec<AchievementId> {
        self.state.update(|state| state.recent_unlocks.drain())
    }

    pub fn clear_recent_unlocks(&mut self) {
        self.state.update(|state| state.recent_unlocks.clear());
    }

    // ========================================
    // READ ACCESS
    // ========================================

    /// Frozen copy of the whole state
    pub fn snapshot(&self) -> Arc<AchievementsState> {
        self.state.snapshot()
    }

    pub fn stats(&self) -> &MiningStats {
        &self.state.get().stats
    }

    pub fn achievement(&self, id: AchievementId) -> Option<&AchievementRecord> {
        self.state.get().achievements.get(&id)
    }

    pub fn achievements(&self) -> impl Iterator<Item = &AchievementRecord> {
        self.state.get().achievements.values()
    }

    pub fn achievements_by_category(
        &self,
        category: AchievementCategory,
    ) -> Vec<&AchievementRecord> {
        queries::achievements_by_category(&self.state.get().achievements, category)
    }

    pub fn progress(&self) -> AchievementProgress {
        queries::achievement_progress(self.state.get().achievements.values())
    }

    pub fn is_streak_active(&self) -> bool {
        streaks::is_streak_active(self.stats(), self.clock.today())
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn storage_location(&self) -> String {
        self.persistence.describe()
    }

    // ========================================
    // INTERNALS
    // ========================================

    /// Run a stats mutation; if it changed anything, check unlocks and persist
    fn mutate_stats(
        &mut self,
        mutate: impl FnOnce(&mut MiningStats, chrono::NaiveDate) -> bool,
    ) -> Vec<AchievementId> {
        let today = self.clock.today();
        let changed = self.state.update(|state| mutate(&mut state.stats, today));
        if !changed {
            return Vec::new();
        }

        let unlocked = self.run_checks();
        self.persist();
        unlocked
    }

    fn persist(&self) {
        self.persistence.save(self.state.get());
    }

    fn log_unlocks(&self, ids: &[AchievementId]) {
        for id in ids {
            if let Some(record) = self.state.get().achievements.get(id) {
                tracing::info!(
                    "Achievement unlocked: {} ({}, {})",
                    record.definition.name,
                    id,
                    record.definition.rarity.as_str()
                );
            }
        }
    }
}
