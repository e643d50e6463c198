//! Mining activity tracking
//!
//! Turns samples from the mining backend into stats and achievement updates:
//! sessions on start, hashrate peaks, share and earnings deltas, and a ticker
//! that adds mining time while any hardware is mining.

mod events;
mod ticker;

pub use events::{HardwareClass, MiningEvent};
pub use ticker::MiningTicker;

use std::collections::BTreeMap;
use std::sync::{Arc, MutexGuard, PoisonError};
use std::time::Duration;

use crate::config::TrackerSettings;
use crate::stats::{AchievementId, AchievementManager, DailyStatsUpdate, SharedManager};

/// Last observed state of one miner
#[derive(Debug, Clone, Default, PartialEq)]
struct HardwareState {
    is_mining: bool,
    hash_rate: f64,
    /// First observed share counter, then the last one
    shares_baseline: Option<u64>,
    /// First observed earnings estimate, then the last one
    earnings_baseline: Option<f64>,
}

/// Feeds mining samples into a shared [`AchievementManager`]
pub struct MiningTracker {
    manager: SharedManager,
    settings: TrackerSettings,
    hardware: BTreeMap<HardwareClass, HardwareState>,
    session_active: bool,
    ticker: Option<MiningTicker>,
}

impl MiningTracker {
    pub fn new(manager: SharedManager, settings: TrackerSettings) -> Self {
        Self {
            manager,
            settings,
            hardware: BTreeMap::new(),
            session_active: false,
            ticker: None,
        }
    }

    pub fn manager(&self) -> &SharedManager {
        &self.manager
    }

    /// Whether a mining session is in progress
    pub fn is_mining(&self) -> bool {
        self.session_active
    }

    /// Apply one sample and return the achievements it unlocked.
    ///
    /// Starting a session spawns the mining ticker, so this must run inside a
    /// tokio runtime.
    pub fn handle(&mut self, event: MiningEvent) -> Vec<AchievementId> {
        match event {
            MiningEvent::MiningStatus {
                hardware,
                is_mining,
                hash_rate,
                estimated_earnings,
            } => {
                let mut unlocked = self.update_status(hardware, is_mining, hash_rate);
                if let Some(earnings) = estimated_earnings {
                    unlocked.extend(self.update_earnings(hardware, earnings));
                }
                unlocked
            }
            MiningEvent::PoolStats {
                hardware,
                accepted_shares,
            } => self.update_shares(hardware, accepted_shares),
            MiningEvent::PerformanceMode { enabled } => {
                if enabled && self.lock().unlock_achievement(AchievementId::PerformanceMode) {
                    vec![AchievementId::PerformanceMode]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Stop the ticker and end the current session
    pub fn shutdown(&mut self) {
        self.stop_ticker();
        self.session_active = false;
    }

    // ========================================
    // SAMPLE HANDLING
    // ========================================

    fn update_status(
        &mut self,
        hardware: HardwareClass,
        is_mining: bool,
        hash_rate: f64,
    ) -> Vec<AchievementId> {
        let state = self.hardware.entry(hardware).or_default();
        state.is_mining = is_mining;
        state.hash_rate = if hash_rate.is_finite() { hash_rate } else { 0.0 };

        let any_mining = self.hardware.values().any(|s| s.is_mining);
        let mut unlocked = Vec::new();

        if any_mining && !self.session_active {
            self.session_active = true;
            unlocked.extend(self.lock().record_session());
            self.arm_ticker();
        } else if !any_mining && self.session_active {
            self.session_active = false;
            self.stop_ticker();
            tracing::info!("Mining stopped");
        }

        let total: f64 = self.hardware.values().map(|s| s.hash_rate).sum();
        if total > 0.0 {
            let mut manager = self.lock();
            unlocked.extend(manager.update_hashrate(total));
            manager.record_daily_stats(DailyStatsUpdate::peak_hashrate(total));
        }

        unlocked
    }

    fn update_shares(&mut self, hardware: HardwareClass, accepted: u64) -> Vec<AchievementId> {
        let state = self.hardware.entry(hardware).or_default();
        let previous = state.shares_baseline.replace(accepted);

        let new_shares = match previous {
            Some(previous) if accepted > previous => accepted - previous,
            Some(previous) if accepted < previous => {
                tracing::debug!(
                    "{} share counter went from {} to {}, re-baselining",
                    hardware.as_str(),
                    previous,
                    accepted
                );
                return Vec::new();
            }
            _ => return Vec::new(),
        };

        let mut manager = self.lock();
        let unlocked = manager.increment_shares(new_shares);
        manager.record_daily_stats(DailyStatsUpdate::shares(new_shares));
        unlocked
    }

    fn update_earnings(&mut self, hardware: HardwareClass, estimate: f64) -> Vec<AchievementId> {
        if !estimate.is_finite() {
            return Vec::new();
        }

        let state = self.hardware.entry(hardware).or_default();
        let previous = state.earnings_baseline.replace(estimate);

        let delta = match previous {
            Some(previous) if estimate > previous => estimate - previous,
            _ => return Vec::new(),
        };

        let xtm = delta / self.settings.earnings_divisor;
        if xtm <= 0.0 || !xtm.is_finite() {
            return Vec::new();
        }

        let mut manager = self.lock();
        let unlocked = manager.add_earnings(xtm);
        manager.record_daily_stats(DailyStatsUpdate::earnings(xtm));
        unlocked
    }

    // ========================================
    // TICKER
    // ========================================

    fn arm_ticker(&mut self) {
        self.stop_ticker();
        let period = Duration::from_secs(self.settings.tick_interval_secs);
        self.ticker = Some(MiningTicker::start(Arc::clone(&self.manager), period));
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
    }

    fn lock(&self) -> MutexGuard<'_, AchievementManager> {
        self.manager.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for MiningTracker {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{MemoryBackend, PersistenceGateway};

    fn tracker() -> MiningTracker {
        let manager =
            AchievementManager::new(PersistenceGateway::new(MemoryBackend::new())).into_shared();
        MiningTracker::new(manager, TrackerSettings::default())
    }

    fn status(hardware: HardwareClass, is_mining: bool, hash_rate: f64) -> MiningEvent {
        MiningEvent::MiningStatus {
            hardware,
            is_mining,
            hash_rate,
            estimated_earnings: None,
        }
    }

    fn earnings(hardware: HardwareClass, estimate: f64) -> MiningEvent {
        MiningEvent::MiningStatus {
            hardware,
            is_mining: true,
            hash_rate: 0.0,
            estimated_earnings: Some(estimate),
        }
    }

    fn shares(hardware: HardwareClass, accepted: u64) -> MiningEvent {
        MiningEvent::PoolStats {
            hardware,
            accepted_shares: accepted,
        }
    }

    #[tokio::test]
    async fn test_session_recorded_once_per_start() {
        let mut tracker = tracker();

        let unlocked = tracker.handle(status(HardwareClass::Cpu, true, 0.0));
        assert!(unlocked.contains(&AchievementId::FirstSession));
        tracker.handle(status(HardwareClass::Gpu, true, 0.0));
        tracker.handle(status(HardwareClass::Cpu, false, 0.0));
        assert!(tracker.is_mining());
        assert_eq!(tracker.lock().stats().sessions_count, 1);

        tracker.handle(status(HardwareClass::Gpu, false, 0.0));
        assert!(!tracker.is_mining());
        tracker.handle(status(HardwareClass::Gpu, true, 0.0));
        assert_eq!(tracker.lock().stats().sessions_count, 2);

        tracker.shutdown();
    }

    #[tokio::test]
    async fn test_hashrate_is_summed_across_hardware() {
        let mut tracker = tracker();
        tracker.handle(status(HardwareClass::Cpu, true, 600.0));
        let unlocked = tracker.handle(status(HardwareClass::Gpu, true, 500.0));

        assert_eq!(unlocked, vec![AchievementId::HashNovice]);
        assert_eq!(tracker.lock().stats().best_hashrate, 1_100.0);
        tracker.shutdown();
    }

    #[tokio::test]
    async fn test_first_share_sample_is_baseline() {
        let mut tracker = tracker();

        assert!(tracker.handle(shares(HardwareClass::Cpu, 40)).is_empty());
        assert_eq!(tracker.lock().stats().total_shares_submitted, 0);

        let unlocked = tracker.handle(shares(HardwareClass::Cpu, 41));
        assert_eq!(unlocked, vec![AchievementId::FirstShare]);

        // Restarted pool counter re-baselines, then counts from there
        tracker.handle(shares(HardwareClass::Cpu, 0));
        tracker.handle(shares(HardwareClass::Cpu, 3));
        assert_eq!(tracker.lock().stats().total_shares_submitted, 4);

        // Classes keep separate baselines
        tracker.handle(shares(HardwareClass::Gpu, 100));
        assert_eq!(tracker.lock().stats().total_shares_submitted, 4);
    }

    #[tokio::test]
    async fn test_earnings_from_zero_are_counted() {
        let mut tracker = tracker();

        tracker.handle(earnings(HardwareClass::Gpu, 0.0));
        let unlocked = tracker.handle(earnings(HardwareClass::Gpu, 1_500_000.0));
        assert!(unlocked.contains(&AchievementId::FirstXtm));

        let stats = tracker.lock().stats().clone();
        assert_eq!(stats.total_xtm_earned, 1.5);
        let today = stats.daily_stats.values().next().unwrap();
        assert_eq!(today.xtm_earned, 1.5);
        tracker.shutdown();
    }

    #[tokio::test]
    async fn test_performance_mode_unlocks_once() {
        let mut tracker = tracker();
        assert!(tracker
            .handle(MiningEvent::PerformanceMode { enabled: false })
            .is_empty());
        assert_eq!(
            tracker.handle(MiningEvent::PerformanceMode { enabled: true }),
            vec![AchievementId::PerformanceMode]
        );
        assert!(tracker
            .handle(MiningEvent::PerformanceMode { enabled: true })
            .is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_runs_only_while_mining() {
        let mut tracker = tracker();
        tracker.handle(status(HardwareClass::Cpu, true, 0.0));

        tokio::time::sleep(Duration::from_secs(25)).await;
        assert_eq!(tracker.lock().stats().total_mining_seconds, 20);

        tracker.handle(status(HardwareClass::Cpu, false, 0.0));
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(tracker.lock().stats().total_mining_seconds, 20);
    }
}
