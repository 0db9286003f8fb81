// state.rs

use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::history::History;
use crate::notify::{Change, Notifier, SubscriptionId};
use crate::DEFAULT_MAX_HEAP;

/// Read-only view of a [`HistoryState`] taken at one point in time.
#[derive(Debug)]
pub struct Snapshot<'a, T> {
    pub current: Option<&'a T>,
    /// Oldest first.
    pub histories: &'a [T],
}

impl<T> Clone for Snapshot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Snapshot<'_, T> {}

/// A current value plus a bounded history of the values it replaced.
///
/// Every mutation that changes the current value or the history notifies the
/// registered observers and raises the flag returned by [`HistoryState::take_changed`].
pub struct HistoryState<T> {
    current: Option<T>,
    history: History<T>,
    notifier: Notifier<T>,
}

impl<T> HistoryState<T> {
    /// An empty state with no current value and the default bound.
    pub fn new() -> Self {
        Self::from_parts(None, History::default())
    }

    pub fn with_value(value: T) -> Self {
        Self::from_parts(Some(value), History::default())
    }

    pub fn builder() -> Builder<T> {
        Builder::new()
    }

    fn from_parts(current: Option<T>, history: History<T>) -> Self {
        Self { current, history, notifier: Notifier::new() }
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Prior values, oldest first.
    pub fn histories(&self) -> &[T] {
        self.history.all()
    }

    pub fn snapshot(&self) -> Snapshot<'_, T> {
        Snapshot { current: self.current.as_ref(), histories: self.history.all() }
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn max_heap(&self) -> usize {
        self.history.max_heap()
    }

    /// Replaces the current value, moving the old one (if any) to the end of the history.
    pub fn set(&mut self, next: impl Into<Option<T>>) {
        self.replace(next.into());
    }

    /// Like [`HistoryState::set`], with the new value computed from the current one.
    pub fn update<F, R>(&mut self, f: F)
    where
        F: FnOnce(Option<&T>) -> R,
        R: Into<Option<T>>,
    {
        let next = f(self.current.as_ref()).into();
        self.replace(next);
    }

    fn replace(&mut self, next: Option<T>) {
        let evicted = match self.current.take() {
            Some(previous) => self.history.add(previous),
            None => 0,
        };
        self.current = next;
        debug!(len = self.history.len(), evicted, "set current value");
        self.notify(Change::Value);
    }

    /// Empties the history. The current value stays as it is.
    pub fn clear_items(&mut self) {
        if !self.history.clear() {
            debug!("history already empty");
            return;
        }
        debug!("cleared history");
        self.notify(Change::History);
    }

    pub fn set_max_heap(&mut self, max_heap: usize) -> Result<()> {
        let evicted = self.history.set_max_heap(max_heap)?;
        debug!(max_heap, evicted, "resized history");
        if evicted > 0 {
            self.notify(Change::History);
        }
        Ok(())
    }

    /// Observers run synchronously inside the mutating call. Behind a
    /// [`SharedHistoryState`](crate::SharedHistoryState) that call holds the lock, so an
    /// observer must not call back into the same shared handle.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(Change, Snapshot<'_, T>) + Send + 'static,
    {
        self.notifier.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn take_changed(&mut self) -> bool {
        self.notifier.take_changed()
    }

    fn notify(&mut self, change: Change) {
        let snapshot = Snapshot { current: self.current.as_ref(), histories: self.history.all() };
        self.notifier.notify(change, snapshot);
    }
}

impl<T: Clone> HistoryState<T> {
    /// Undoes one step: the most recent history entry is removed, becomes the
    /// current value and is returned. The replaced value is discarded.
    /// Returns `None` and changes nothing when the history is empty.
    pub fn pop(&mut self) -> Option<T> {
        let value = match self.history.pop() {
            Some(value) => value,
            None => {
                debug!("nothing to pop");
                return None;
            }
        };
        self.current = Some(value.clone());
        debug!(len = self.history.len(), "popped history entry");
        self.notify(Change::Value);
        Some(value)
    }
}

impl<T: Clone + PartialEq> HistoryState<T> {
    /// Removes every history entry equal to `value`, then makes the newest
    /// remaining entry the current value (`None` if nothing remains).
    /// Notifies only if an entry was removed or the current value changed.
    pub fn delete_item(&mut self, value: &T) {
        let removed = self.history.remove_all(value);
        let tail = self.history.last().cloned();
        debug!(removed, len = self.history.len(), "deleted history entries");
        if removed == 0 && self.current == tail {
            return;
        }
        self.current = tail;
        self.notify(Change::Value);
    }
}

impl<T> Default for HistoryState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for HistoryState<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HistoryState")
            .field("current", &self.current)
            .field("history", &self.history)
            .field("notifier", &self.notifier)
            .finish()
    }
}

enum Initial<T> {
    Absent,
    Value(T),
    Producer(Box<dyn FnOnce() -> T>),
}

/// Configures the initial value and bound of a [`HistoryState`].
pub struct Builder<T> {
    initial: Initial<T>,
    max_heap: usize,
}

impl<T> Builder<T> {
    pub fn new() -> Self {
        Self { initial: Initial::Absent, max_heap: DEFAULT_MAX_HEAP }
    }

    pub fn initial(mut self, value: T) -> Self {
        self.initial = Initial::Value(value);
        self
    }

    /// The producer runs once, inside [`Builder::build`].
    pub fn initial_with<F>(mut self, producer: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        self.initial = Initial::Producer(Box::new(producer));
        self
    }

    pub fn max_heap(mut self, max_heap: usize) -> Self {
        self.max_heap = max_heap;
        self
    }

    pub fn build(self) -> Result<HistoryState<T>> {
        let history = History::new(self.max_heap)?;
        let current = match self.initial {
            Initial::Absent => None,
            Initial::Value(value) => Some(value),
            Initial::Producer(producer) => Some(producer()),
        };
        Ok(HistoryState::from_parts(current, history))
    }
}

impl<T> Default for Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}
