//! Raise history

use heapless::Deque;

use crate::Millis;

/// Number of raises remembered
pub const HISTORY_CAPACITY: usize = 16;

/// Chronological record of confirmed lid raises
///
/// Append-only except for undo, which removes the newest entry. When full,
/// recording a new raise forgets the oldest one, but the newest forgotten
/// raise still counts as the last raise once undo has emptied the record.
#[derive(Debug, Clone, Default)]
pub struct RaiseHistory {
    entries: Deque<Millis, HISTORY_CAPACITY>,
    /// Newest raise evicted for capacity; never undone
    evicted: Option<Millis>,
}

impl RaiseHistory {
    pub fn new() -> Self {
        Self {
            entries: Deque::new(),
            evicted: None,
        }
    }

    /// Record a raise at `at`
    pub fn record(&mut self, at: Millis) {
        if self.entries.is_full() {
            if let Some(oldest) = self.entries.pop_front() {
                self.evicted = Some(oldest);
            }
        }
        self.entries.push_back(at).ok();
    }

    /// Remove and return the most recent raise
    ///
    /// Only raises still held can be undone.
    pub fn undo(&mut self) -> Option<Millis> {
        self.entries.pop_back()
    }

    /// Most recent raise still in effect
    pub fn last(&self) -> Option<Millis> {
        self.entries.back().copied().or(self.evicted)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Millis> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_undo() {
        let mut h = RaiseHistory::new();
        assert!(h.is_empty());
        assert_eq!(h.last(), None);

        h.record(10);
        h.record(20);
        assert_eq!(h.last(), Some(20));
        assert_eq!(h.undo(), Some(20));
        assert_eq!(h.last(), Some(10));
        assert_eq!(h.undo(), Some(10));
        assert_eq!(h.undo(), None);
        assert!(h.is_empty());
    }

    #[test]
    fn test_full_history_forgets_oldest() {
        let mut h = RaiseHistory::new();
        for i in 0..(HISTORY_CAPACITY as Millis + 3) {
            h.record(i * 100);
        }
        assert_eq!(h.len(), HISTORY_CAPACITY);
        assert_eq!(h.iter().next(), Some(&300));
        assert_eq!(h.last(), Some((HISTORY_CAPACITY as Millis + 2) * 100));
    }

    #[test]
    fn test_undo_past_capacity_keeps_evicted_raise() {
        let mut h = RaiseHistory::new();
        for i in 0..(HISTORY_CAPACITY as Millis + 3) {
            h.record(i * 100);
        }
        for _ in 0..HISTORY_CAPACITY {
            assert!(h.undo().is_some());
        }
        assert!(h.is_empty());
        assert_eq!(h.undo(), None);
        // Raises 0 and 100 fell out first; 200 was the newest one evicted
        assert_eq!(h.last(), Some(200));
    }

    #[test]
    fn test_undo_within_capacity_empties_completely() {
        let mut h = RaiseHistory::new();
        h.record(5);
        h.undo();
        assert_eq!(h.last(), None);
    }
}
