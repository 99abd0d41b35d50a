//! Binary min-heap keyed by priority.
//!
//! Wraps [`BinaryHeap`] (a max-heap) by reversing the key comparison.
//! Entries with equal priority pop in insertion order; callers should treat
//! this tie-break as implementation-defined.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<P, T> {
    priority: P,
    sequence: u64,
    value: T,
}

impl<P: Ord, T> PartialEq for Entry<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: Ord, T> Eq for Entry<P, T> {}

impl<P: Ord, T> PartialOrd for Entry<P, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord, T> Ord for Entry<P, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: smallest priority, then oldest sequence, is the heap maximum.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// A min-priority queue over any totally ordered key.
#[derive(Debug)]
pub struct MinHeap<P, T> {
    heap: BinaryHeap<Entry<P, T>>,
    next_sequence: u64,
}

impl<P: Ord, T> MinHeap<P, T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// Inserts `value` with the given priority.
    pub fn push(&mut self, priority: P, value: T) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Entry {
            priority,
            sequence,
            value,
        });
    }

    /// Removes and returns the entry with the lowest priority.
    pub fn pop(&mut self) -> Option<(P, T)> {
        self.heap.pop().map(|e| (e.priority, e.value))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<P: Ord, T> Default for MinHeap<P, T> {
    fn default() -> Self {
        Self::new()
    }
}
