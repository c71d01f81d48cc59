//! The search frontier: a binary min-heap over cell indices with
//! decrease-key.
//!
//! `std::collections::BinaryHeap` has no decrease-key, so the heap is kept by
//! hand. Each cell records its heap slot in [`Cell::heap_index`]; the heap is
//! the only writer of that field.

use crate::cell::Cell;

/// Open set of a best-first search, ordered by [`Cell::rank`].
///
/// The set stores indices into a cell arena that is passed to every
/// operation. Insertion, extraction and decrease-key are O(log n).
#[derive(Debug, Clone, Default)]
pub struct OpenSet {
    heap: Vec<usize>,
}

impl OpenSet {
    /// Create an empty open set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty open set with room for `capacity` cells.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Number of cells in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether cell `idx` is in the set.
    #[inline]
    pub fn contains(&self, cells: &[Cell], idx: usize) -> bool {
        cells[idx]
            .heap_index
            .is_some_and(|slot| self.heap.get(slot) == Some(&idx))
    }

    /// Index of the minimum cell without removing it.
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Add cell `idx`. The cell must not already be in the set.
    pub fn insert(&mut self, cells: &mut [Cell], idx: usize) {
        debug_assert!(!self.contains(cells, idx), "cell {idx} inserted twice");
        let slot = self.heap.len();
        self.heap.push(idx);
        cells[idx].heap_index = Some(slot);
        self.sift_up(cells, slot);
    }

    /// Remove and return the minimum cell, or `None` if the set is empty.
    pub fn extract_min(&mut self, cells: &mut [Cell]) -> Option<usize> {
        let last = self.heap.pop()?;
        let min = if self.heap.is_empty() {
            last
        } else {
            let min = std::mem::replace(&mut self.heap[0], last);
            cells[last].heap_index = Some(0);
            self.sift_down(cells, 0);
            min
        };
        cells[min].heap_index = None;
        Some(min)
    }

    /// Restore heap order after the cost of cell `idx` was lowered.
    ///
    /// No-op if the cell is not in the set.
    pub fn decrease_key(&mut self, cells: &mut [Cell], idx: usize) {
        if !self.contains(cells, idx) {
            return;
        }
        if let Some(slot) = cells[idx].heap_index {
            self.sift_up(cells, slot);
        }
    }

    /// Remove every cell from the set.
    pub fn clear(&mut self, cells: &mut [Cell]) {
        for &idx in &self.heap {
            cells[idx].heap_index = None;
        }
        self.heap.clear();
    }

    fn sift_up(&mut self, cells: &mut [Cell], mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if cells[self.heap[slot]].rank(&cells[self.heap[parent]]).is_lt() {
                self.swap(cells, slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, cells: &mut [Cell], mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut best = slot;
            if left < len && cells[self.heap[left]].rank(&cells[self.heap[best]]).is_lt() {
                best = left;
            }
            if right < len && cells[self.heap[right]].rank(&cells[self.heap[best]]).is_lt() {
                best = right;
            }
            if best == slot {
                break;
            }
            self.swap(cells, slot, best);
            slot = best;
        }
    }

    fn swap(&mut self, cells: &mut [Cell], a: usize, b: usize) {
        self.heap.swap(a, b);
        cells[self.heap[a]].heap_index = Some(a);
        cells[self.heap[b]].heap_index = Some(b);
    }
}
