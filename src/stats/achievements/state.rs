//! Copy-on-write container for the achievements state

use std::collections::BTreeMap;
use std::sync::Arc;

use super::definitions::AchievementId;
use super::notifications::NotificationQueue;
use super::records::AchievementRecord;
use crate::stats::models::MiningStats;

/// Everything the achievement system tracks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AchievementsState {
    pub achievements: BTreeMap<AchievementId, AchievementRecord>,
    pub stats: MiningStats,
    /// Not persisted
    pub recent_unlocks: NotificationQueue,
    /// Not persisted
    pub initialized: bool,
}

/// Owner of the current state.
///
/// Readers get an `Arc` snapshot that never changes underneath them; writers
/// go through [`StateContainer::update`], which clones the state first when a
/// snapshot is still held elsewhere.
#[derive(Debug, Clone, Default)]
pub struct StateContainer {
    current: Arc<AchievementsState>,
}

impl StateContainer {
    pub fn new(state: AchievementsState) -> Self {
        Self {
            current: Arc::new(state),
        }
    }

    /// Current state, frozen at the time of the call
    pub fn snapshot(&self) -> Arc<AchievementsState> {
        Arc::clone(&self.current)
    }

    /// Borrow the current state without taking a snapshot
    pub fn get(&self) -> &AchievementsState {
        &self.current
    }

    /// Apply a mutation and return whatever the closure returns
    pub fn update<R>(&mut self, mutate: impl FnOnce(&mut AchievementsState) -> R) -> R {
        mutate(Arc::make_mut(&mut self.current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_isolated_from_later_updates() {
        let mut container = StateContainer::default();
        let before = container.snapshot();

        container.update(|state| state.stats.sessions_count = 3);

        assert_eq!(before.stats.sessions_count, 0);
        assert_eq!(container.get().stats.sessions_count, 3);
        assert_eq!(container.snapshot().stats.sessions_count, 3);
    }

    #[test]
    fn test_update_returns_closure_value() {
        let mut container = StateContainer::new(AchievementsState {
            initialized: true,
            ..AchievementsState::default()
        });
        let was = container.update(|state| std::mem::replace(&mut state.initialized, false));
        assert!(was);
        assert!(!container.get().initialized);
    }
}
