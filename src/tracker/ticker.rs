//! Periodic mining time accounting

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::stats::{DailyStatsUpdate, SharedManager};

/// Background task adding mining time every period while it runs.
///
/// Dropping the ticker stops it.
pub struct MiningTicker {
    manager: SharedManager,
    cancelled: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl MiningTicker {
    /// Spawn the ticker. The first tick lands one full period from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(manager: SharedManager, period: Duration) -> Self {
        let period = period.max(Duration::from_secs(1));
        let seconds = period.as_secs();
        let cancelled = Arc::new(AtomicBool::new(false));

        let task_manager = Arc::clone(&manager);
        let task_cancelled = Arc::clone(&cancelled);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if !tick(&task_manager, &task_cancelled, seconds) {
                    break;
                }
            }
        });

        tracing::debug!("Mining ticker armed ({}s)", seconds);
        Self {
            manager,
            cancelled,
            handle,
        }
    }

    /// Cancel the ticker. No tick is applied after this returns.
    pub fn stop(&self) {
        {
            // Taking the manager lock waits out a tick in progress
            let _manager = self.manager.lock().unwrap_or_else(PoisonError::into_inner);
            self.cancelled.store(true, Ordering::SeqCst);
        }
        self.handle.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for MiningTicker {
    fn drop(&mut self) {
        if !self.is_stopped() {
            self.stop();
        }
    }
}

/// Apply one tick. Returns `false` once the ticker has been cancelled.
fn tick(manager: &SharedManager, cancelled: &AtomicBool, seconds: u64) -> bool {
    let mut manager = manager.lock().unwrap_or_else(PoisonError::into_inner);
    if cancelled.load(Ordering::SeqCst) {
        return false;
    }

    manager.add_mining_time(seconds);
    manager.record_daily_stats(DailyStatsUpdate::mining_time(seconds));
    tracing::debug!(
        "Mining tick: +{}s (total {}s)",
        seconds,
        manager.stats().total_mining_seconds
    );
    true
}
