use std::collections::VecDeque;

use crate::models::LookupResult;

/// Default number of results kept in the history
pub const HISTORY_CAPACITY: usize = 5;

/// Bounded, most-recent-first log of lookup results
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<LookupResult>,
    capacity: usize,
}

impl HistoryLog {
    /// Create a log holding at most `capacity` results (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Put a result at the front, evicting the oldest when full
    pub fn push(&mut self, result: LookupResult) {
        self.entries.push_front(result);
        if self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                tracing::trace!("Evicted history entry {}", evicted.id);
            }
        }
    }

    /// Most-recent-first iterator
    pub fn iter(&self) -> impl Iterator<Item = &LookupResult> {
        self.entries.iter()
    }

    pub fn snapshot(&self) -> Vec<LookupResult> {
        self.entries.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}
