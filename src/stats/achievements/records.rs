//! Per-achievement unlock state and the catalog merge

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::definitions::{Achievement, AchievementId, ACHIEVEMENTS};

/// Catalog entry combined with its unlock state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementRecord {
    #[serde(flatten)]
    pub definition: &'static Achievement,
    /// Unlock time in ms since epoch; `None` while locked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<i64>,
    pub progress: f64,
}

impl AchievementRecord {
    /// Fresh locked record
    pub fn locked(definition: &'static Achievement) -> Self {
        Self {
            definition,
            unlocked_at: None,
            progress: 0.0,
        }
    }

    pub fn id(&self) -> AchievementId {
        self.definition.id
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }
}

/// The part of a persisted record that survives a catalog refresh.
///
/// Descriptive fields in the snapshot are ignored on load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProgress {
    #[serde(default)]
    pub unlocked_at: Option<i64>,
    #[serde(default)]
    pub progress: Option<f64>,
}

impl From<&AchievementRecord> for StoredProgress {
    fn from(record: &AchievementRecord) -> Self {
        Self {
            unlocked_at: record.unlocked_at,
            progress: Some(record.progress),
        }
    }
}

/// Build one record per catalog entry, keeping prior unlock state.
///
/// Descriptive fields always come from the catalog so renames and re-tiering
/// propagate. Prior ids that are no longer in the catalog are dropped.
pub fn merge_with_catalog(
    prior: &BTreeMap<String, StoredProgress>,
) -> BTreeMap<AchievementId, AchievementRecord> {
    ACHIEVEMENTS
        .iter()
        .map(|definition| {
            let record = match prior.get(definition.id.as_str()) {
                Some(stored) => AchievementRecord {
                    definition,
                    unlocked_at: stored.unlocked_at,
                    progress: stored.progress.filter(|p| p.is_finite()).unwrap_or(0.0),
                },
                None => AchievementRecord::locked(definition),
            };
            (definition.id, record)
        })
        .collect()
}

/// Reduce live records to the shape `merge_with_catalog` consumes
pub fn stored_progress(
    records: &BTreeMap<AchievementId, AchievementRecord>,
) -> BTreeMap<String, StoredProgress> {
    records
        .values()
        .map(|record| (record.id().as_str().to_string(), StoredProgress::from(record)))
        .collect()
}
