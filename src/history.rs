// history.rs

use tracing::trace;

use crate::error::{Result, StateError};
use crate::DEFAULT_MAX_HEAP;

/// Previously held values, oldest first, never longer than `max_heap`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
    entries: Vec<T>,
    max_heap: usize,
}

impl<T> History<T> {
    pub fn new(max_heap: usize) -> Result<Self> {
        if max_heap == 0 {
            return Err(StateError::InvalidMaxHeap(max_heap));
        }
        Ok(Self { entries: Vec::new(), max_heap })
    }

    /// Appends `entry` and evicts from the front if the bound is exceeded.
    /// Returns the number of evicted entries.
    pub fn add(&mut self, entry: T) -> usize {
        self.entries.push(entry);
        self.enforce_bound()
    }

    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop()
    }

    pub fn last(&self) -> Option<&T> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        let had_entries = !self.entries.is_empty();
        self.entries.clear();
        had_entries
    }

    pub fn all(&self) -> &[T] {
        &self.entries
    }

    pub fn max_heap(&self) -> usize {
        self.max_heap
    }

    /// Changes the bound, evicting the oldest entries right away when it shrinks.
    pub fn set_max_heap(&mut self, max_heap: usize) -> Result<usize> {
        if max_heap == 0 {
            return Err(StateError::InvalidMaxHeap(max_heap));
        }
        self.max_heap = max_heap;
        Ok(self.enforce_bound())
    }

    fn enforce_bound(&mut self) -> usize {
        let excess = self.entries.len().saturating_sub(self.max_heap);
        if excess > 0 {
            self.entries.drain(..excess);
            trace!(excess, max_heap = self.max_heap, "evicted oldest history entries");
        }
        excess
    }
}

impl<T: PartialEq> History<T> {
    /// Drops every entry equal to `value`, keeping the order of the rest.
    pub fn remove_all(&mut self, value: &T) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry != value);
        before - self.entries.len()
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self { entries: Vec::new(), max_heap: DEFAULT_MAX_HEAP }
    }
}
