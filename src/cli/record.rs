//! Record command implementation

use anyhow::Result;
use clap::Subcommand;

use xtm_achievements::config::Config;
use xtm_achievements::stats::DailyStatsUpdate;

use super::{open_manager, print_unlocks};

/// One stats update to apply
#[derive(Debug, Clone, Subcommand)]
pub enum RecordKind {
    /// Add accepted shares
    Shares { count: u64 },
    /// Add earned XTM
    Earnings { amount: f64 },
    /// Add mining time in seconds
    Time { seconds: u64 },
    /// Report a hashrate sample in H/s
    Hashrate { hashrate: f64 },
    /// Count a mining session for today
    Session,
}

/// Apply one update and print what it unlocked
pub async fn record_command(config: &Config, kind: RecordKind) -> Result<()> {
    let mut manager = open_manager(config)?;

    let unlocked = match kind {
        RecordKind::Shares { count } => {
            let unlocked = manager.increment_shares(count);
            manager.record_daily_stats(DailyStatsUpdate::shares(count));
            unlocked
        }
        RecordKind::Earnings { amount } => {
            let unlocked = manager.add_earnings(amount);
            manager.record_daily_stats(DailyStatsUpdate::earnings(amount));
            unlocked
        }
        RecordKind::Time { seconds } => {
            let unlocked = manager.add_mining_time(seconds);
            manager.record_daily_stats(DailyStatsUpdate::mining_time(seconds));
            unlocked
        }
        RecordKind::Hashrate { hashrate } => {
            let unlocked = manager.update_hashrate(hashrate);
            manager.record_daily_stats(DailyStatsUpdate::peak_hashrate(hashrate));
            unlocked
        }
        RecordKind::Session => manager.record_session(),
    };

    if unlocked.is_empty() {
        println!("Recorded.");
    } else {
        print_unlocks(&unlocked);
    }
    manager.clear_recent_unlocks();
    Ok(())
}
