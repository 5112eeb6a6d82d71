//! Min-priority frontier queue with lazy invalidation.

use std::collections::BinaryHeap;

use crate::error::SearchError;

/// Heap entry: a flat cell index ordered by priority.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    priority: i32,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first.
        other.priority.cmp(&self.priority)
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-priority queue of `(priority, cell index)` pairs.
///
/// There is no decrease-key operation: when a cell's priority improves,
/// the caller pushes a second entry and the old one goes stale. On pop,
/// the caller compares the returned priority against the cell's current
/// best priority and skips the entry when they disagree.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. Duplicates for the same index are allowed.
    #[inline]
    pub fn push(&mut self, priority: i32, idx: usize) {
        self.heap.push(Entry { priority, idx });
    }

    /// Remove and return the entry with the smallest priority.
    #[inline]
    pub fn pop_min(&mut self) -> Result<(i32, usize), SearchError> {
        match self.heap.pop() {
            Some(e) => Ok((e.priority, e.idx)),
            None => Err(SearchError::EmptyQueue),
        }
    }

    /// Number of entries, stale ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop all entries, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
