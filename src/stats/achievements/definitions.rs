//! Achievement definitions and metadata
//!
//! All achievements are defined here with their category, rarity and unlock
//! requirement. The catalog order is the display order and, within a family,
//! the ascending tier order.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::stats::models::MiningStats;

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AchievementId {
    // Share milestones
    FirstShare,
    CenturyClub,
    ThousandShares,
    TenThousandShares,
    HundredThousandShares,

    // Hashrate
    HashNovice,
    HashApprentice,
    HashMaster,
    HashLegend,

    // Mining time
    FirstHour,
    DayMiner,
    WeekWarrior,
    MonthMaster,

    // Streaks
    Streak3,
    Streak7,
    Streak30,

    // Earnings
    FirstXtm,
    TenXtm,
    HundredXtm,
    ThousandXtm,
    TenThousandXtm,

    // Special
    PerformanceMode,
    FirstSession,
    TenSessions,
    HundredSessions,
}

impl AchievementId {
    /// Get the string ID used in snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstShare => "first_share",
            Self::CenturyClub => "century_club",
            Self::ThousandShares => "thousand_shares",
            Self::TenThousandShares => "ten_thousand_shares",
            Self::HundredThousandShares => "hundred_thousand_shares",
            Self::HashNovice => "hash_novice",
            Self::HashApprentice => "hash_apprentice",
            Self::HashMaster => "hash_master",
            Self::HashLegend => "hash_legend",
            Self::FirstHour => "first_hour",
            Self::DayMiner => "day_miner",
            Self::WeekWarrior => "week_warrior",
            Self::MonthMaster => "month_master",
            Self::Streak3 => "streak_3",
            Self::Streak7 => "streak_7",
            Self::Streak30 => "streak_30",
            Self::FirstXtm => "first_xtm",
            Self::TenXtm => "ten_xtm",
            Self::HundredXtm => "hundred_xtm",
            Self::ThousandXtm => "thousand_xtm",
            Self::TenThousandXtm => "ten_thousand_xtm",
            Self::PerformanceMode => "performance_mode",
            Self::FirstSession => "first_session",
            Self::TenSessions => "ten_sessions",
            Self::HundredSessions => "hundred_sessions",
        }
    }

    /// Parse from snapshot string
    pub fn parse(s: &str) -> Option<Self> {
        ACHIEVEMENTS.iter().map(|a| a.id).find(|id| id.as_str() == s)
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AchievementId {
    type Err = UnknownAchievement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownAchievement(s.to_string()))
    }
}

impl Serialize for AchievementId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// An id string that names no catalog entry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown achievement: {0}")]
pub struct UnknownAchievement(pub String);

/// Achievement category for grouping in UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Mining,
    Earnings,
    Time,
    Social,
    Special,
}

impl AchievementCategory {
    pub const ALL: [AchievementCategory; 5] = [
        Self::Mining,
        Self::Earnings,
        Self::Time,
        Self::Social,
        Self::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mining => "mining",
            Self::Earnings => "earnings",
            Self::Time => "time",
            Self::Social => "social",
            Self::Special => "special",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "mining" => Some(Self::Mining),
            "earnings" => Some(Self::Earnings),
            "time" => Some(Self::Time),
            "social" => Some(Self::Social),
            "special" => Some(Self::Special),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mining => "Mining",
            Self::Earnings => "Earnings",
            Self::Time => "Time",
            Self::Social => "Social",
            Self::Special => "Special",
        }
    }
}

/// Prestige tag, ordered from most to least common
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementRarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl AchievementRarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }
}

/// Tiered achievement families checked by the unlock engine.
///
/// Each family is compared against exactly one field of [`MiningStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementFamily {
    Shares,
    Hashrate,
    MiningTime,
    Streak,
    Earnings,
    Sessions,
}

impl AchievementFamily {
    pub const ALL: [AchievementFamily; 6] = [
        Self::Shares,
        Self::Hashrate,
        Self::MiningTime,
        Self::Streak,
        Self::Earnings,
        Self::Sessions,
    ];

    /// The stat this family's requirements are measured against
    pub fn stat_value(&self, stats: &MiningStats) -> f64 {
        match self {
            Self::Shares => stats.total_shares_submitted as f64,
            Self::Hashrate => stats.best_hashrate,
            Self::MiningTime => stats.total_mining_seconds as f64,
            Self::Streak => f64::from(stats.longest_streak_days),
            Self::Earnings => stats.total_xtm_earned,
            Self::Sessions => stats.sessions_count as f64,
        }
    }

    /// Family members in ascending tier order
    pub fn members(&self) -> impl Iterator<Item = &'static Achievement> + '_ {
        ACHIEVEMENTS
            .iter()
            .filter(move |a| a.family == Some(*self))
    }
}

/// Achievement definition with all metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    pub rarity: AchievementRarity,
    /// Stat value at which the achievement unlocks
    pub requirement: f64,
    /// Family checked by the unlock engine; `None` for externally triggered ones
    #[serde(skip)]
    pub family: Option<AchievementFamily>,
}

/// All achievement definitions
pub static ACHIEVEMENTS: &[Achievement] = &[
    // === SHARES ===
    Achievement {
        id: AchievementId::FirstShare,
        name: "First Share",
        description: "Submit your first mining share",
        icon: "⛏️",
        category: AchievementCategory::Mining,
        rarity: AchievementRarity::Common,
        requirement: 1.0,
        family: Some(AchievementFamily::Shares),
    },
    Achievement {
        id: AchievementId::CenturyClub,
        name: "Century Club",
        description: "Submit 100 accepted shares",
        icon: "💯",
        category: AchievementCategory::Mining,
        rarity: AchievementRarity::Common,
        requirement: 100.0,
        family: Some(AchievementFamily::Shares),
    },
    Achievement {
        id: AchievementId::ThousandShares,
        name: "Share Master",
        description: "Submit 1,000 accepted shares",
        icon: "🎯",
        category: AchievementCategory::Mining,
        rarity: AchievementRarity::Uncommon,
        requirement: 1_000.0,
        family: Some(AchievementFamily::Shares),
    },
    Achievement {
        id: AchievementId::TenThousandShares,
        name: "Share Legend",
        description: "Submit 10,000 accepted shares",
        icon: "🏆",
        category: AchievementCategory::Mining,
        rarity: AchievementRarity::Rare,
        requirement: 10_000.0,
        family: Some(AchievementFamily::Shares),
    },
    Achievement {
        id: AchievementId::HundredThousandShares,
        name: "Share God",
        description: "Submit 100,000 accepted shares",
        icon: "👑",
        category: AchievementCategory::Mining,
        rarity: AchievementRarity::Epic,
        requirement: 100_000.0,
        family: Some(AchievementFamily::Shares),
    },
    // === HASHRATE ===
    Achievement {
        id: AchievementId::HashNovice,
        name: "Hash Novice",
        description: "Reach 1 KH/s hashrate",
        icon: "🔥",
        category: AchievementCategory::Mining,
        rarity: AchievementRarity::Common,
        requirement: 1_000.0,
        family: Some(AchievementFamily::Hashrate),
    },
    Achievement {
        id: AchievementId::HashApprentice,
        name: "Hash Apprentice",
        description: "Reach 10 KH/s hashrate",
        icon: "🔥",
        category: AchievementCategory::Mining,
        rarity: AchievementRarity::Uncommon,
        requirement: 10_000.0,
        family: Some(AchievementFamily::Hashrate),
    },
    Achievement {
        id: AchievementId::HashMaster,
        name: "Hash Master",
        description: "Reach 100 KH/s hashrate",
        icon: "🔥",
        category: AchievementCategory::Mining,
        rarity: AchievementRarity::Rare,
        requirement: 100_000.0,
        family: Some(AchievementFamily::Hashrate),
    },
    Achievement {
        id: AchievementId::HashLegend,
        name: "Hash Legend",
        description: "Reach 1 MH/s hashrate",
        icon: "⚡",
        category: AchievementCategory::Mining,
        rarity: AchievementRarity::Epic,
        requirement: 1_000_000.0,
        family: Some(AchievementFamily::Hashrate),
    },
    // === MINING TIME ===
    Achievement {
        id: AchievementId::FirstHour,
        name: "Getting Started",
        description: "Mine for 1 hour total",
        icon: "⏰",
        category: AchievementCategory::Time,
        rarity: AchievementRarity::Common,
        requirement: 3_600.0,
        family: Some(AchievementFamily::MiningTime),
    },
    Achievement {
        id: AchievementId::DayMiner,
        name: "Day Miner",
        description: "Mine for 24 hours total",
        icon: "📅",
        category: AchievementCategory::Time,
        rarity: AchievementRarity::Common,
        requirement: 86_400.0,
        family: Some(AchievementFamily::MiningTime),
    },
    Achievement {
        id: AchievementId::WeekWarrior,
        name: "Week Warrior",
        description: "Mine for 168 hours (1 week) total",
        icon: "📆",
        category: AchievementCategory::Time,
        rarity: AchievementRarity::Uncommon,
        requirement: 604_800.0,
        family: Some(AchievementFamily::MiningTime),
    },
    Achievement {
        id: AchievementId::MonthMaster,
        name: "Month Master",
        description: "Mine for 720 hours (1 month) total",
        icon: "🗓️",
        category: AchievementCategory::Time,
        rarity: AchievementRarity::Rare,
        requirement: 2_592_000.0,
        family: Some(AchievementFamily::MiningTime),
    },
    // === STREAK ===
    Achievement {
        id: AchievementId::Streak3,
        name: "Consistent Miner",
        description: "Mine 3 days in a row",
        icon: "🔗",
        category: AchievementCategory::Time,
        rarity: AchievementRarity::Common,
        requirement: 3.0,
        family: Some(AchievementFamily::Streak),
    },
    Achievement {
        id: AchievementId::Streak7,
        name: "Weekly Warrior",
        description: "Mine 7 days in a row",
        icon: "⛓️",
        category: AchievementCategory::Time,
        rarity: AchievementRarity::Uncommon,
        requirement: 7.0,
        family: Some(AchievementFamily::Streak),
    },
    Achievement {
        id: AchievementId::Streak30,
        name: "Diamond Hands",
        description: "Mine 30 days in a row",
        icon: "💎",
        category: AchievementCategory::Time,
        rarity: AchievementRarity::Epic,
        requirement: 30.0,
        family: Some(AchievementFamily::Streak),
    },
    // === EARNINGS ===
    Achievement {
        id: AchievementId::FirstXtm,
        name: "First Earnings",
        description: "Earn your first XTM",
        icon: "💰",
        category: AchievementCategory::Earnings,
        rarity: AchievementRarity::Common,
        // one micro XTM
        requirement: 0.000_001,
        family: Some(AchievementFamily::Earnings),
    },
    Achievement {
        id: AchievementId::TenXtm,
        name: "Double Digits",
        description: "Earn 10 XTM total",
        icon: "💵",
        category: AchievementCategory::Earnings,
        rarity: AchievementRarity::Common,
        requirement: 10.0,
        family: Some(AchievementFamily::Earnings),
    },
    Achievement {
        id: AchievementId::HundredXtm,
        name: "Triple Digits",
        description: "Earn 100 XTM total",
        icon: "💴",
        category: AchievementCategory::Earnings,
        rarity: AchievementRarity::Uncommon,
        requirement: 100.0,
        family: Some(AchievementFamily::Earnings),
    },
    Achievement {
        id: AchievementId::ThousandXtm,
        name: "Thousandaire",
        description: "Earn 1,000 XTM total",
        icon: "💎",
        category: AchievementCategory::Earnings,
        rarity: AchievementRarity::Rare,
        requirement: 1_000.0,
        family: Some(AchievementFamily::Earnings),
    },
    Achievement {
        id: AchievementId::TenThousandXtm,
        name: "XTM Whale",
        description: "Earn 10,000 XTM total",
        icon: "🐋",
        category: AchievementCategory::Earnings,
        rarity: AchievementRarity::Epic,
        requirement: 10_000.0,
        family: Some(AchievementFamily::Earnings),
    },
    // === SPECIAL ===
    Achievement {
        id: AchievementId::PerformanceMode,
        name: "Efficiency Expert",
        description: "Enable Performance Mode",
        icon: "⚡",
        category: AchievementCategory::Special,
        rarity: AchievementRarity::Common,
        requirement: 1.0,
        family: None,
    },
    Achievement {
        id: AchievementId::FirstSession,
        name: "Welcome Miner",
        description: "Complete your first mining session",
        icon: "👋",
        category: AchievementCategory::Special,
        rarity: AchievementRarity::Common,
        requirement: 1.0,
        family: Some(AchievementFamily::Sessions),
    },
    Achievement {
        id: AchievementId::TenSessions,
        name: "Regular Miner",
        description: "Complete 10 mining sessions",
        icon: "🔄",
        category: AchievementCategory::Special,
        rarity: AchievementRarity::Uncommon,
        requirement: 10.0,
        family: Some(AchievementFamily::Sessions),
    },
    Achievement {
        id: AchievementId::HundredSessions,
        name: "Dedicated Miner",
        description: "Complete 100 mining sessions",
        icon: "🎖️",
        category: AchievementCategory::Special,
        rarity: AchievementRarity::Rare,
        requirement: 100.0,
        family: Some(AchievementFamily::Sessions),
    },
];

impl PartialEq for Achievement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Achievement {
    /// Get achievement definition by ID
    pub fn get(id: AchievementId) -> &'static Achievement {
        ACHIEVEMENTS
            .iter()
            .find(|a| a.id == id)
            .expect("All achievements should be defined")
    }

    /// Get total number of achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }
}
