//! Playback history tracking
//!
//! Maintains a bounded history of played track ids for "previous"
//! functionality

use std::collections::VecDeque;

use phonoteka_core::types::TrackId;

/// Playback history with bounded size
///
/// Records recently played tracks for "previous" navigation. Implements a
/// ring buffer that automatically discards oldest entries.
#[derive(Debug, Clone)]
pub struct History {
    /// History buffer (most recent = back)
    entries: VecDeque<TrackId>,

    /// Maximum history size
    capacity: usize,
}

impl History {
    /// Create new history with the given maximum size
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a track id to history
    ///
    /// If history is full, the oldest entry is discarded
    pub fn push(&mut self, id: TrackId) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front(); // Remove oldest
        }
        self.entries.push_back(id);
    }

    /// Most recent entry, without removing it
    pub fn peek(&self) -> Option<&TrackId> {
        self.entries.back()
    }

    /// Pop the most recent entry for "previous" navigation
    pub fn pop(&mut self) -> Option<TrackId> {
        self.entries.pop_back()
    }

    /// Number of entries in history
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if history is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Maximum history size
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(50) // Default: 50 tracks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> TrackId {
        TrackId::new(format!("col_0_track_{}", n))
    }

    #[test]
    fn create_history() {
        let history = History::new(10);
        assert_eq!(history.capacity(), 10);
        assert_eq!(history.len(), 0);
        assert!(history.is_empty());
    }

    #[test]
    fn push_and_peek() {
        let mut history = History::new(10);
        history.push(id(1));
        history.push(id(2));

        assert_eq!(history.len(), 2);
        assert_eq!(history.peek(), Some(&id(2)));
        // Peek does not consume
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn pop_is_lifo() {
        let mut history = History::new(10);
        history.push(id(1));
        history.push(id(2));
        history.push(id(3));

        assert_eq!(history.pop(), Some(id(3)));
        assert_eq!(history.pop(), Some(id(2)));
        assert_eq!(history.pop(), Some(id(1)));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn history_bounded() {
        let mut history = History::new(3);

        for n in 1..=4 {
            history.push(id(n));
        }
        assert_eq!(history.len(), 3);

        // Oldest entry (1) was discarded
        assert_eq!(history.pop(), Some(id(4)));
        assert_eq!(history.pop(), Some(id(3)));
        assert_eq!(history.pop(), Some(id(2)));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn clear_history() {
        let mut history = History::new(10);
        history.push(id(1));
        history.push(id(2));

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn default_history() {
        let history = History::default();
        assert_eq!(history.capacity(), 50);
    }
}
