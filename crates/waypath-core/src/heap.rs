//! Array-backed binary heap with stable element handles
//!
//! The heap is a complete binary tree stored in a `Vec`, ordered as a
//! max-heap or min-heap for its whole lifetime:
//!
//!   parent(i) = (i - 1) / 2
//!   left(i)   = 2i + 1
//!   right(i)  = 2i + 2
//!
//!   Max: data[parent(i)] >= data[i]    Min: data[parent(i)] <= data[i]
//!
//! Every stored element carries a [`Handle`] whose position is tracked on
//! each swap, so updates and removals by handle sift from a known index.
//! Value-based `delete`/`update` are kept and locate the element by equality.


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::HeapConfig;
use crate::error::{Result, WaypathError};

/// Ordering a heap maintains between a parent and its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeapOrder {
    /// Largest element at the root
    #[default]
    Max,
    /// Smallest element at the root
    Min,
}

impl FromStr for HeapOrder {
    type Err = WaypathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "max" => Ok(HeapOrder::Max),
            "min" => Ok(HeapOrder::Min),
            other => Err(WaypathError::invalid_value("heap order", other)),
        }
    }
}

impl fmt::Display for HeapOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapOrder::Max => write!(f, "max"),
            HeapOrder::Min => write!(f, "min"),
        }
    }
}

/// How `update` replaces an element already in the heap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateStrategy {
    /// Overwrite in place, then sift up or down from that index only
    #[default]
    Sift,
    /// Remove the old element, then insert the new one
    Replace,
}

/// How the heap property is restored after an insert or a removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepairStrategy {
    /// Sift along the single affected path, O(log n)
    #[default]
    Sift,
    /// Re-heapify the whole array bottom-up, O(n)
    Rebuild,
}

/// Stable reference to an element stored in a [`BinaryHeap`].
///
/// A handle stays valid until its element is removed or the heap is rebuilt
/// from new contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(usize);

#[derive(Debug, Clone)]
struct Slot<T> {
    handle: Handle,
    value: T,
}

/// Binary heap usable as a max-heap or a min-heap
#[derive(Debug, Clone)]
pub struct BinaryHeap<T> {
    order: HeapOrder,
    update: UpdateStrategy,
    repair: RepairStrategy,
    data: Vec<Slot<T>>,
    /// `handle - first_handle` -> current index in `data`, `None` once removed
    positions: Vec<Option<usize>>,
    /// First handle id issued since the last `build`
    first_handle: usize,
}

impl<T: Ord> BinaryHeap<T> {
    /// Create an empty heap with the default strategies
    pub fn new(order: HeapOrder) -> Self {
        Self::with_config(order, HeapConfig::default())
    }

    /// Create an empty heap with explicit update/repair strategies
    pub fn with_config(order: HeapOrder, config: HeapConfig) -> Self {
        Self {
            order,
            update: config.update,
            repair: config.repair,
            data: Vec::new(),
            positions: Vec::new(),
            first_handle: 0,
        }
    }

    /// Create a heap holding `items`
    pub fn from_vec(items: Vec<T>, order: HeapOrder) -> Self {
        let mut heap = Self::new(order);
        heap.build(items);
        heap
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `ceil(log2(len))`, 0 for an empty heap. Informational only.
    pub fn height(&self) -> u32 {
        match self.data.len() {
            0 => 0,
            n => usize::BITS - (n - 1).leading_zeros(),
        }
    }

    pub fn left(index: usize) -> usize {
        2 * index + 1
    }

    pub fn right(index: usize) -> usize {
        2 * (index + 1)
    }

    pub fn parent(index: usize) -> Option<usize> {
        if index == 0 {
            None
        } else {
            Some((index - 1) / 2)
        }
    }

    /// Replace the contents with `items` and restore the heap property
    /// bottom-up. Handles issued before the call are invalidated.
    pub fn build(&mut self, items: Vec<T>) -> Vec<Handle> {
        self.data.clear();
        self.first_handle += self.positions.len();
        self.positions.clear();
        self.extend(items)
    }

    /// Append `items` and re-heapify once
    pub fn extend(&mut self, items: Vec<T>) -> Vec<Handle> {
        let handles: Vec<Handle> = items
            .into_iter()
            .map(|value| {
                let handle = self.allocate_handle();
                self.push_slot(Slot { handle, value });
                handle
            })
            .collect();
        self.heapify();
        handles
    }

    /// Insert `value`, returning its handle
    pub fn insert(&mut self, value: T) -> Handle {
        let handle = self.allocate_handle();
        self.push_slot(Slot { handle, value });
        let last = self.data.len() - 1;
        self.repair_at(last);
        handle
    }

    /// Root element without removal
    pub fn peek(&self) -> Result<&T> {
        self.data
            .first()
            .map(|slot| &slot.value)
            .ok_or(WaypathError::EmptyHeap)
    }

    /// Remove and return the root element
    pub fn pop(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(WaypathError::EmptyHeap);
        }
        Ok(self.remove_at(0))
    }

    /// Remove the first stored element equal to `value`
    pub fn delete(&mut self, value: &T) -> Result<T> {
        let index = self.locate(value)?;
        Ok(self.remove_at(index))
    }

    /// Remove the element behind `handle`
    pub fn remove(&mut self, handle: Handle) -> Result<T> {
        let index = self.index_of(handle)?;
        Ok(self.remove_at(index))
    }

    /// Replace the first element equal to `old` with `new`
    pub fn update(&mut self, old: &T, new: T) -> Result<()> {
        let index = self.locate(old)?;
        self.replace_at(index, new);
        Ok(())
    }

    /// Replace the element behind `handle` with `new`; the handle stays valid
    pub fn update_handle(&mut self, handle: Handle, new: T) -> Result<()> {
        let index = self.index_of(handle)?;
        self.replace_at(index, new);
        Ok(())
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.position(handle).map(|index| &self.data[index].value)
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.position(handle).is_some()
    }

    /// Elements in backing-array order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter().map(|slot| &slot.value)
    }

    /// Whether every parent/child pair honors the configured order
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| {
            let parent = (i - 1) / 2;
            !self.precedes(&self.data[i].value, &self.data[parent].value)
        })
    }

    fn locate(&self, value: &T) -> Result<usize> {
        if self.data.is_empty() {
            return Err(WaypathError::EmptyHeap);
        }
        self.data
            .iter()
            .position(|slot| slot.value == *value)
            .ok_or(WaypathError::ElementNotFound)
    }

    fn position(&self, handle: Handle) -> Option<usize> {
        handle
            .0
            .checked_sub(self.first_handle)
            .and_then(|slot| self.positions.get(slot).copied().flatten())
    }

    fn index_of(&self, handle: Handle) -> Result<usize> {
        if self.data.is_empty() {
            return Err(WaypathError::EmptyHeap);
        }
        self.position(handle).ok_or(WaypathError::ElementNotFound)
    }

    fn allocate_handle(&mut self) -> Handle {
        self.positions.push(None);
        Handle(self.first_handle + self.positions.len() - 1)
    }

    /// Record where the live `handle` now sits in `data`
    fn place(&mut self, handle: Handle, index: Option<usize>) {
        self.positions[handle.0 - self.first_handle] = index;
    }

    fn push_slot(&mut self, slot: Slot<T>) {
        self.place(slot.handle, Some(self.data.len()));
        self.data.push(slot);
    }

    fn replace_at(&mut self, index: usize, new: T) {
        match self.update {
            UpdateStrategy::Sift => {
                self.data[index].value = new;
                self.restore(index);
            }
            UpdateStrategy::Replace => {
                let handle = self.data[index].handle;
                self.remove_at(index);
                self.push_slot(Slot { handle, value: new });
                let last = self.data.len() - 1;
                self.repair_at(last);
            }
        }
    }

    fn remove_at(&mut self, index: usize) -> T {
        let slot = self.data.swap_remove(index);
        self.place(slot.handle, None);
        if index < self.data.len() {
            self.place(self.data[index].handle, Some(index));
            self.repair_at(index);
        }
        slot.value
    }

    /// Restore order around `index` using the configured repair strategy
    fn repair_at(&mut self, index: usize) {
        match self.repair {
            RepairStrategy::Sift => self.restore(index),
            RepairStrategy::Rebuild => self.heapify(),
        }
    }

    fn restore(&mut self, index: usize) {
        let settled = self.sift_up(index);
        if settled == index {
            self.sift_down(index);
        }
    }

    fn heapify(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while let Some(parent) = Self::parent(index) {
            if !self.precedes(&self.data[index].value, &self.data[parent].value) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
        index
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let (left, right) = (Self::left(index), Self::right(index));
            let mut best = index;
            if left < len && self.precedes(&self.data[left].value, &self.data[best].value) {
                best = left;
            }
            if right < len && self.precedes(&self.data[right].value, &self.data[best].value) {
                best = right;
            }
            if best == index {
                break;
            }
            self.swap(index, best);
            index = best;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.place(self.data[a].handle, Some(a));
        self.place(self.data[b].handle, Some(b));
    }

    /// Whether `a` belongs strictly closer to the root than `b`
    fn precedes(&self, a: &T, b: &T) -> bool {
        match self.order {
            HeapOrder::Max => a > b,
            HeapOrder::Min => a < b,
        }
    }
}

/// Sort `items` by draining a heap: descending for `Max`, ascending for `Min`
pub fn heap_sort<T: Ord>(items: Vec<T>, order: HeapOrder) -> Vec<T> {
    let mut heap = BinaryHeap::from_vec(items, order);
    let mut sorted = Vec::with_capacity(heap.len());
    while let Ok(value) = heap.pop() {
        sorted.push(value);
    }
    sorted
}
