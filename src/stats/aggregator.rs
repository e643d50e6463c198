//! Stats aggregation - accumulates raw mining counters
//!
//! Each function mutates the aggregate in place and reports whether anything
//! changed. Non-positive or non-finite input is a no-op so cumulative totals
//! never move backwards.

use chrono::NaiveDate;

use super::models::{DailyStats, DailyStatsUpdate, MiningStats};

/// Add accepted shares to the lifetime total
pub fn add_shares(stats: &mut MiningStats, count: u64) -> bool {
    if count == 0 {
        return false;
    }
    stats.total_shares_submitted = stats.total_shares_submitted.saturating_add(count);
    true
}

/// Add earned XTM to the lifetime total.
///
/// An amount that would push the total past `f64::MAX` is rejected; a
/// non-finite total cannot be written to a snapshot.
pub fn add_earnings(stats: &mut MiningStats, amount: f64) -> bool {
    let Some(total) = finite_sum(stats.total_xtm_earned, amount) else {
        return false;
    };
    stats.total_xtm_earned = total;
    true
}

/// Add active mining time to the lifetime total
pub fn add_mining_time(stats: &mut MiningStats, seconds: u64) -> bool {
    if seconds == 0 {
        return false;
    }
    stats.total_mining_seconds = stats.total_mining_seconds.saturating_add(seconds);
    true
}

/// Raise the best hashrate if the sample beats it
pub fn observe_hashrate(stats: &mut MiningStats, hashrate: f64) -> bool {
    if !hashrate.is_finite() || hashrate <= stats.best_hashrate {
        return false;
    }
    stats.best_hashrate = hashrate;
    true
}

/// Count a new mining session started on `today`
pub fn start_session(stats: &mut MiningStats, today: NaiveDate) {
    stats.sessions_count = stats.sessions_count.saturating_add(1);
    stats.first_mining_date.get_or_insert(today);
}

/// Merge a partial update into the bucket for `today`, creating it if needed
pub fn merge_daily(stats: &mut MiningStats, today: NaiveDate, update: &DailyStatsUpdate) -> bool {
    let day_xtm = stats.daily_stats.get(&today).map_or(0.0, |b| b.xtm_earned);
    let shares = update.shares_submitted.unwrap_or(0);
    let xtm = update.xtm_earned.and_then(|v| finite_sum(day_xtm, v));
    let seconds = update.mining_seconds.unwrap_or(0);
    let peak = update.peak_hashrate.filter(|v| is_positive(*v));

    if shares == 0 && xtm.is_none() && seconds == 0 && peak.is_none() {
        return false;
    }

    let bucket = stats
        .daily_stats
        .entry(today)
        .or_insert_with(|| DailyStats::empty(today));

    bucket.shares_submitted = bucket.shares_submitted.saturating_add(shares);
    bucket.mining_seconds = bucket.mining_seconds.saturating_add(seconds);
    if let Some(xtm) = xtm {
        bucket.xtm_earned = xtm;
    }
    if let Some(peak) = peak {
        bucket.peak_hashrate = bucket.peak_hashrate.max(peak);
    }
    true
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// `total + amount` for a positive amount, `None` if the result overflows
fn finite_sum(total: f64, amount: f64) -> Option<f64> {
    if !is_positive(amount) {
        return None;
    }
    let sum = total + amount;
    if sum.is_finite() {
        Some(sum)
    } else {
        tracing::warn!("Ignoring {} XTM: total would overflow", amount);
        None
    }
}
