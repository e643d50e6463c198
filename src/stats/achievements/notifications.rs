//! Queue of freshly unlocked achievements awaiting display

use std::collections::VecDeque;

use super::definitions::AchievementId;

/// Ordered ids waiting to be shown as toasts.
///
/// No deduplication happens here; the unlock engine only enqueues an id on
/// the locked → unlocked transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    pending: VecDeque<AchievementId>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, id: AchievementId) {
        self.pending.push_back(id);
    }

    /// Take every pending id, oldest first, leaving the queue empty
    pub fn drain(&mut self) -> Vec<AchievementId> {
        self.pending.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AchievementId> {
        self.pending.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut queue = NotificationQueue::new();
        queue.enqueue(AchievementId::FirstShare);
        queue.enqueue(AchievementId::FirstSession);
        queue.enqueue(AchievementId::FirstShare);

        assert_eq!(queue.len(), 3);
        assert_eq!(
            queue.drain(),
            vec![
                AchievementId::FirstShare,
                AchievementId::FirstSession,
                AchievementId::FirstShare
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut queue = NotificationQueue::new();
        queue.enqueue(AchievementId::HashNovice);
        queue.clear();
        assert!(queue.drain().is_empty());
    }
}
