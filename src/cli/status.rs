//! Status command implementation

use anyhow::Result;

use xtm_achievements::config::Config;

use super::{format_duration, format_hashrate, open_manager};

/// Show the achievement progress and lifetime totals
pub async fn status_command(config: &Config) -> Result<()> {
    let manager = open_manager(config)?;
    let progress = manager.progress();
    let stats = manager.stats();

    println!(
        "Achievements: {}/{} unlocked ({}%)\n",
        progress.unlocked, progress.total, progress.percentage
    );

    println!("  Shares submitted: {}", stats.total_shares_submitted);
    println!("  XTM earned:       {:.4}", stats.total_xtm_earned);
    println!("  Mining time:      {}", format_duration(stats.total_mining_seconds));
    println!("  Best hashrate:    {}", format_hashrate(stats.best_hashrate));
    println!("  Sessions:         {}", stats.sessions_count);

    let streak_state = if manager.is_streak_active() {
        "active"
    } else {
        "inactive"
    };
    println!(
        "  Streak:           {} days ({}), longest {} days",
        stats.current_streak_days, streak_state, stats.longest_streak_days
    );

    if let Some(first) = stats.first_mining_date {
        println!("  Mining since:     {}", first);
    }

    println!("\nStored at {}", manager.storage_location());
    Ok(())
}
