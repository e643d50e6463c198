//! Time source for unlock timestamps and calendar days
//!
//! Streaks and daily buckets are keyed by the local calendar day, unlock
//! timestamps are milliseconds since the Unix epoch.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of "now" for the achievement manager
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since the Unix epoch
    fn now_ms(&self) -> i64;

    /// Current local calendar day
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Settable clock shared between a test and the manager it drives.
///
/// Clones share the same instant, so advancing one advances all of them.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Clock set to noon of the given day
    pub fn at_day(day: NaiveDate) -> Self {
        Self::new(day.and_hms_opt(12, 0, 0).unwrap_or_default())
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    /// Move to noon of the given day
    pub fn set_day(&self, day: NaiveDate) {
        self.set(day.and_hms_opt(12, 0, 0).unwrap_or_default());
    }

    pub fn advance_days(&self, days: i64) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += chrono::Duration::days(days);
    }

    fn current(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.current().and_utc().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        self.current().date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let clock = ManualClock::at_day(day);
        let other = clock.clone();

        other.advance_days(2);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
    }

    #[test]
    fn test_manual_clock_now_ms() {
        let day = NaiveDate::from_ymd_opt(2023, 12, 28).unwrap();
        let clock = ManualClock::new(day.and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(clock.now_ms(), 1703721600000);
    }
}
