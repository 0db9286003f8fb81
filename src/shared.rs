// shared.rs

use std::sync::{Arc, Mutex};

use crate::error::{Result, StateError};
use crate::state::HistoryState;

/// A [`HistoryState`] that can be handed to several threads.
///
/// The current value and the history sit behind a single lock, and every
/// method holds it for the whole operation. Observers registered with
/// [`HistoryState::subscribe`] run while the lock is held; one that calls back
/// into a clone of this handle deadlocks.
pub struct SharedHistoryState<T> {
    inner: Arc<Mutex<HistoryState<T>>>,
}

impl<T> SharedHistoryState<T> {
    pub fn new(state: HistoryState<T>) -> Self {
        Self { inner: Arc::new(Mutex::new(state)) }
    }

    /// Runs `f` with exclusive access to the state.
    pub fn with<R>(&self, f: impl FnOnce(&mut HistoryState<T>) -> R) -> Result<R> {
        let mut state = self.inner.lock().map_err(|_| StateError::Poisoned)?;
        Ok(f(&mut state))
    }

    pub fn set(&self, next: impl Into<Option<T>>) -> Result<()> {
        self.with(|state| state.set(next))
    }

    pub fn update<F, R>(&self, f: F) -> Result<()>
    where
        F: FnOnce(Option<&T>) -> R,
        R: Into<Option<T>>,
    {
        self.with(|state| state.update(f))
    }

    pub fn clear_items(&self) -> Result<()> {
        self.with(|state| state.clear_items())
    }

    pub fn set_max_heap(&self, max_heap: usize) -> Result<()> {
        self.with(|state| state.set_max_heap(max_heap))?
    }

    pub fn len(&self) -> Result<usize> {
        self.with(|state| state.len())
    }
}

impl<T: Clone> SharedHistoryState<T> {
    pub fn current(&self) -> Result<Option<T>> {
        self.with(|state| state.current().cloned())
    }

    /// Copies the history out, since the lock can't outlive the call.
    pub fn histories(&self) -> Result<Vec<T>> {
        self.with(|state| state.histories().to_vec())
    }

    pub fn pop(&self) -> Result<Option<T>> {
        self.with(|state| state.pop())
    }
}

impl<T: Clone + PartialEq> SharedHistoryState<T> {
    pub fn delete_item(&self, value: &T) -> Result<()> {
        self.with(|state| state.delete_item(value))
    }
}

impl<T> Clone for SharedHistoryState<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T> From<HistoryState<T>> for SharedHistoryState<T> {
    fn from(state: HistoryState<T>) -> Self {
        Self::new(state)
    }
}
