//! Calendar-day helpers for streaks and daily buckets
//!
//! Days are stored as ISO dates ("YYYY-MM-DD") and compared as whole days.

use chrono::NaiveDate;

/// Format a day as its bucket key "YYYY-MM-DD".
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use xtm_achievements::stats::day_bucket;
///
/// let day = NaiveDate::from_ymd_opt(2023, 12, 28).unwrap();
/// assert_eq!(day_bucket(day), "2023-12-28");
/// ```
pub fn day_bucket(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Whole days from `earlier` to `later`; negative when `later` comes first.
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

/// The `count` days ending at `today`, oldest first.
pub fn trailing_days(today: NaiveDate, count: u32) -> Vec<NaiveDate> {
    (0..count)
        .rev()
        .filter_map(|offset| today.checked_sub_days(chrono::Days::new(u64::from(offset))))
        .collect()
}
