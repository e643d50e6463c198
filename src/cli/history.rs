//! History command implementation

use anyhow::Result;

use xtm_achievements::config::Config;
use xtm_achievements::stats::queries::{recent_daily_stats, recent_history};
use xtm_achievements::stats::{day_bucket, DailyStats};

use super::{format_duration, format_hashrate, open_manager};

/// Show daily buckets.
///
/// By default the calendar window of the last `days` days ending today, with
/// idle days shown as `-`. With `recent`, the last `days` days that have any
/// activity, newest first.
pub async fn history_command(config: &Config, days: u32, recent: bool) -> Result<()> {
    let manager = open_manager(config)?;
    let stats = manager.stats();

    let rows: Vec<(String, Option<&DailyStats>)> = if recent {
        recent_history(stats, days as usize)
            .into_iter()
            .map(|bucket| (day_bucket(bucket.date), Some(bucket)))
            .collect()
    } else {
        let today = manager.clock().today();
        recent_daily_stats(stats, today, days)
            .into_iter()
            .rev()
            .map(|(day, bucket)| (day_bucket(day), bucket))
            .collect()
    };

    if rows.iter().all(|(_, bucket)| bucket.is_none()) {
        println!("No mining activity in the last {} days.", days);
        return Ok(());
    }

    println!(
        "{:<12} {:>8} {:>12} {:>10} {:>14}",
        "Date", "Shares", "XTM", "Time", "Peak"
    );
    for (day, bucket) in rows {
        match bucket {
            Some(bucket) => println!(
                "{:<12} {:>8} {:>12.6} {:>10} {:>14}",
                day,
                bucket.shares_submitted,
                bucket.xtm_earned,
                format_duration(bucket.mining_seconds),
                format_hashrate(bucket.peak_hashrate)
            ),
            None => println!("{:<12} {:>8}", day, "-"),
        }
    }
    Ok(())
}
