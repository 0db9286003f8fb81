// notify.rs

use std::fmt;

use crate::state::Snapshot;

/// What a mutation changed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Change {
    /// The current value was replaced. The history may have changed with it.
    Value,
    /// Only the history changed; the current value is untouched.
    History,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SubscriptionId(u64);

pub type Observer<T> = Box<dyn FnMut(Change, Snapshot<'_, T>) + Send>;

pub(crate) struct Notifier<T> {
    observers: Vec<(SubscriptionId, Observer<T>)>,
    next_id: u64,
    changed: bool,
}

impl<T> Notifier<T> {
    pub(crate) fn new() -> Self {
        Self { observers: Vec::new(), next_id: 0, changed: false }
    }

    pub(crate) fn subscribe(&mut self, observer: Observer<T>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Marks the state dirty and runs every observer in subscription order.
    pub(crate) fn notify(&mut self, change: Change, snapshot: Snapshot<'_, T>) {
        self.changed = true;
        for (_, observer) in self.observers.iter_mut() {
            observer(change, snapshot);
        }
    }

    pub(crate) fn take_changed(&mut self) -> bool {
        std::mem::replace(&mut self.changed, false)
    }
}

impl<T> fmt::Debug for Notifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("observers", &self.observers.len())
            .field("changed", &self.changed)
            .finish()
    }
}
