//! Unlock command implementation

use anyhow::{bail, Result};

use xtm_achievements::config::Config;
use xtm_achievements::stats::AchievementId;

use super::{open_manager, print_unlocks};

/// Unlock an achievement by id
pub async fn unlock_command(config: &Config, id: &str) -> Result<()> {
    let Some(id) = AchievementId::parse(id) else {
        bail!("Unknown achievement: {}", id);
    };

    let mut manager = open_manager(config)?;
    if manager.unlock_achievement(id) {
        print_unlocks(&manager.drain_recent_unlocks());
    } else {
        println!("Achievement {} is already unlocked.", id);
    }
    Ok(())
}
