//! List command implementation

use anyhow::{bail, Result};

use xtm_achievements::config::Config;
use xtm_achievements::stats::queries::completion_percent;
use xtm_achievements::stats::{AchievementCategory, AchievementRecord};

use super::open_manager;

/// Which achievements to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    All,
    Unlocked,
    Locked,
}

impl ListFilter {
    fn matches(&self, record: &AchievementRecord) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Unlocked => record.is_unlocked(),
            ListFilter::Locked => !record.is_unlocked(),
        }
    }
}

/// List achievements grouped by category
pub async fn list_command(
    config: &Config,
    category: Option<String>,
    filter: ListFilter,
) -> Result<()> {
    let categories: Vec<AchievementCategory> = match category {
        Some(name) => match AchievementCategory::from_str(&name.to_lowercase()) {
            Some(category) => vec![category],
            None => bail!(
                "Unknown category: {} (expected one of: {})",
                name,
                AchievementCategory::ALL
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        },
        None => AchievementCategory::ALL.to_vec(),
    };

    let manager = open_manager(config)?;
    let stats = manager.stats();
    let mut shown = 0;

    for category in categories {
        let records: Vec<_> = manager
            .achievements_by_category(category)
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect();
        if records.is_empty() {
            continue;
        }

        println!("{}:", category.label());
        for record in records {
            let definition = record.definition;
            let mark = if record.is_unlocked() { "x" } else { " " };
            println!(
                "  [{}] {} {:<20} {:<9} {:>5.1}%  {}",
                mark,
                definition.icon,
                definition.name,
                definition.rarity.as_str(),
                completion_percent(record, stats),
                definition.description
            );
            shown += 1;
        }
        println!();
    }

    if shown == 0 {
        println!("No achievements found.");
    }
    Ok(())
}
