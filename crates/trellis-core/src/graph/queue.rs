//! Minimum priority queue with mutable priorities
//!
//! Backs Dijkstra and A*, which need to lower the priority of an already
//! queued vertex. A binary heap plus a position map gives O(log n)
//! `insert`, `change_priority` and `extract_min`. Contract violations
//! (duplicate insert, update or extraction of a missing item) are bugs in
//! the calling algorithm and surface as errors rather than silent no-ops.

use std::collections::HashMap;

use crate::error::{Result, TrellisError};
use crate::graph::VertexId;

#[derive(Debug, Clone, Copy)]
struct Entry {
    item: VertexId,
    priority: i64,
}

impl Entry {
    /// Ordering key: priority first, vertex id as the deterministic
    /// tie-break so extraction order is reproducible.
    fn key(&self) -> (i64, VertexId) {
        (self.priority, self.item)
    }
}

/// Min-priority queue over vertex ids with updatable priorities.
#[derive(Debug, Clone, Default)]
pub struct MinPriorityQueue {
    heap: Vec<Entry>,
    position: HashMap<VertexId, usize>,
}

impl MinPriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, item: VertexId) -> bool {
        self.position.contains_key(&item)
    }

    /// Current priority of `item`, if queued.
    pub fn priority(&self, item: VertexId) -> Option<i64> {
        self.position.get(&item).map(|&index| self.heap[index].priority)
    }

    /// Add a new item. Fails if the item is already queued.
    pub fn insert(&mut self, item: VertexId, priority: i64) -> Result<()> {
        if self.contains(item) {
            return Err(TrellisError::QueueDuplicate(item));
        }
        let index = self.heap.len();
        self.heap.push(Entry { item, priority });
        self.position.insert(item, index);
        self.sift_up(index);
        Ok(())
    }

    /// Re-prioritize an existing item. Fails if the item is not queued.
    pub fn change_priority(&mut self, item: VertexId, priority: i64) -> Result<()> {
        let Some(&index) = self.position.get(&item) else {
            return Err(TrellisError::QueueMissing(item));
        };
        self.heap[index].priority = priority;
        let index = self.sift_up(index);
        self.sift_down(index);
        Ok(())
    }

    /// Remove and return the lowest-priority item (ties broken by lowest
    /// vertex id). Fails if the queue is empty.
    pub fn extract_min(&mut self) -> Result<VertexId> {
        if self.heap.is_empty() {
            return Err(TrellisError::QueueEmpty);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop().ok_or(TrellisError::QueueEmpty)?;
        self.position.remove(&entry.item);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(entry.item)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position.insert(self.heap[a].item, a);
        self.position.insert(self.heap[b].item, b);
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let up = (index - 1) / 2;
            if self.heap[index].key() >= self.heap[up].key() {
                break;
            }
            self.swap(index, up);
            index = up;
        }
        index
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            if left >= self.heap.len() {
                break;
            }
            let right = left + 1;
            let mut smallest = left;
            if right < self.heap.len() && self.heap[right].key() < self.heap[left].key() {
                smallest = right;
            }
            if self.heap[index].key() <= self.heap[smallest].key() {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }
}
