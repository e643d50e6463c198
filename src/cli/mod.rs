//! CLI command implementations

pub mod feed;
pub mod history;
pub mod init;
pub mod list;
pub mod record;
pub mod status;
pub mod unlock;

use anyhow::Result;

use xtm_achievements::config::Config;
use xtm_achievements::stats::{open_gateway, Achievement, AchievementId, AchievementManager};

/// Open the manager over the configured snapshot store
pub fn open_manager(config: &Config) -> Result<AchievementManager> {
    let gateway = open_gateway(&config.storage)?;
    Ok(AchievementManager::new(gateway))
}

/// Print one line per unlocked achievement
pub fn print_unlocks(ids: &[AchievementId]) {
    for id in ids {
        let achievement = Achievement::get(*id);
        println!(
            "🏆 Achievement unlocked: {} {} [{}] - {}",
            achievement.icon,
            achievement.name,
            achievement.rarity.as_str(),
            achievement.description
        );
    }
}

/// Format seconds as "3d 4h", "2h 15m" or "42m"
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3_600;
    let minutes = (seconds % 3_600) / 60;
    if hours >= 24 {
        format!("{}d {}h", hours / 24, hours % 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Format a hashrate in H/s with a metric prefix
pub fn format_hashrate(hashrate: f64) -> String {
    const UNITS: [&str; 5] = ["H/s", "KH/s", "MH/s", "GH/s", "TH/s"];

    let mut value = hashrate.max(0.0);
    let mut unit = 0;
    while value >= 1_000.0 && unit < UNITS.len() - 1 {
        value /= 1_000.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{:.0} {}", value, UNITS[unit])
    } else {
        format!("{:.2} {}", value, UNITS[unit])
    }
}
