//! Best-first frontier: a min-priority queue with FIFO tie-breaking.
//!
//! Ordering is total and reproducible: entries compare by priority, then by
//! the order in which they were pushed. Two runs that push the same items in
//! the same order pop them in the same order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::error::FrontierError;
use crate::node::FrontierKey;

/// A frontier entry wrapping an item with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest priority first).
#[derive(Debug)]
struct FrontierEntry<T> {
    key: Reverse<FrontierKey>,
    item: T,
}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Best-first frontier.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) push and pop of the best entry
/// - A monotonic insertion counter for FIFO tie-breaking
/// - The high-water mark of the queue size
#[derive(Debug)]
pub struct BestFirstFrontier<T> {
    heap: BinaryHeap<FrontierEntry<T>>,
    next_insertion: u64,
    high_water: usize,
}

impl<T> BestFirstFrontier<T> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_insertion: 0,
            high_water: 0,
        }
    }

    /// Push `item` with the given priority (lower pops first).
    pub fn push(&mut self, item: T, priority: f64) {
        let key = FrontierKey {
            priority: OrderedFloat(priority),
            insertion_order: self.next_insertion,
        };
        self.next_insertion += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            item,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove and return the entry with minimum priority.
    ///
    /// Among equal priorities the earliest-pushed entry wins.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::Empty`] if there is nothing to pop.
    pub fn pop_min(&mut self) -> Result<T, FrontierError> {
        self.heap.pop().map(|e| e.item).ok_or(FrontierError::Empty)
    }

    /// Priority of the entry [`pop_min`](Self::pop_min) would return.
    #[must_use]
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|e| e.key.0.priority.into_inner())
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<T> Default for BestFirstFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}
