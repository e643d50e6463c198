//! Gamification layer: achievement catalog, unlock engine, streaks and notifications
//!
//! This module provides the achievement system on top of the mining stats.

mod checker;
mod definitions;
mod manager;
mod notifications;
mod records;
mod state;
mod streaks;

pub use checker::{check_achievements, check_family_achievements, unlock_achievement};
pub use definitions::{
    Achievement, AchievementCategory, AchievementFamily, AchievementId, AchievementRarity,
    UnknownAchievement, ACHIEVEMENTS,
};
pub use manager::{AchievementManager, SharedManager};
pub use notifications::NotificationQueue;
pub use records::{merge_with_catalog, stored_progress, AchievementRecord, StoredProgress};
pub use state::{AchievementsState, StateContainer};
pub use streaks::{is_streak_active, update_streak, StreakUpdate};
