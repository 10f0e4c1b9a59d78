//! Priority queue over [`BinaryHeap`]
//!
//! Ordering is entirely determined by the wrapped heap's [`HeapOrder`] and
//! the elements' `Ord` implementation.

use crate::config::HeapConfig;
use crate::error::{Result, WaypathError};
use crate::heap::{BinaryHeap, Handle, HeapOrder};

#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<T>,
}

impl<T: Ord> PriorityQueue<T> {
    pub fn new(order: HeapOrder) -> Self {
        Self {
            heap: BinaryHeap::new(order),
        }
    }

    pub fn with_config(order: HeapOrder, config: HeapConfig) -> Self {
        Self {
            heap: BinaryHeap::with_config(order, config),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Add one element
    pub fn enqueue(&mut self, value: T) -> Handle {
        self.heap.insert(value)
    }

    /// Add many elements with a single re-heapify
    pub fn enqueue_all(&mut self, values: Vec<T>) -> Vec<Handle> {
        self.heap.extend(values)
    }

    /// Highest-priority element without removal
    pub fn peek(&self) -> Result<&T> {
        self.heap.peek().map_err(|_| WaypathError::Underflow)
    }

    /// Remove and return the highest-priority element
    pub fn dequeue(&mut self) -> Result<T> {
        if self.heap.is_empty() {
            return Err(WaypathError::Underflow);
        }
        let value = self.heap.pop()?;
        tracing::trace!(remaining = self.heap.len(), "dequeue");
        Ok(value)
    }

    /// Replace the first element equal to `old` with `new`
    pub fn update(&mut self, old: &T, new: T) -> Result<()> {
        self.heap.update(old, new)
    }

    /// Replace the element behind `handle` with `new`, keeping one entry
    pub fn update_handle(&mut self, handle: Handle, new: T) -> Result<()> {
        self.heap.update_handle(handle, new)
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.heap.contains(handle)
    }
}
