//! Shared test utilities for achievement integration tests

#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;

use xtm_achievements::stats::{
    AchievementManager, ManualClock, MemoryBackend, PersistenceGateway,
};

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Manager over an in-memory snapshot with a controllable clock
pub struct Harness {
    pub manager: AchievementManager,
    pub clock: ManualClock,
    pub backend: MemoryBackend,
}

impl Harness {
    pub fn new(start: NaiveDate) -> Self {
        Self::with_backend(start, MemoryBackend::new())
    }

    pub fn with_backend(start: NaiveDate, backend: MemoryBackend) -> Self {
        let clock = ManualClock::at_day(start);
        let manager = AchievementManager::with_clock(
            PersistenceGateway::new(backend.clone()),
            Arc::new(clock.clone()),
        );
        Self {
            manager,
            clock,
            backend,
        }
    }

    /// Reload from the same backend as if the process restarted
    pub fn restart(self) -> Self {
        let Self { clock, backend, .. } = self;
        let manager = AchievementManager::with_clock(
            PersistenceGateway::new(backend.clone()),
            Arc::new(clock.clone()),
        );
        Self {
            manager,
            clock,
            backend,
        }
    }
}
