use std::sync::{Arc, RwLock};

/// Boxed change callback, invoked as `(new_state, previous_state)`.
pub type Listener<T> = Box<dyn Fn(&T, &T) + Send + Sync>;

type SharedListener<T> = Arc<dyn Fn(&T, &T) + Send + Sync>;

/// Registration-ordered listener registry.
pub(crate) struct ListenerSet<T> {
    next_id: u64,
    entries: Vec<(u64, SharedListener<T>)>,
}

impl<T> ListenerSet<T> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, listener: Listener<T>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, Arc::from(listener)));
        id
    }

    pub(crate) fn remove(&mut self, id: u64) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Shallow copy of the callback handles, in registration order.
    pub(crate) fn snapshot(&self) -> Vec<SharedListener<T>> {
        self.entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }
}

/// Handle returned by `subscribe`; removes its listener on demand.
///
/// [`unsubscribe`](Subscription::unsubscribe) is idempotent, and calling it
/// after the store was destroyed (or dropped) is a harmless no-op. Dropping
/// the handle does *not* remove the listener — a listener stays registered
/// until it is explicitly unsubscribed or its store is destroyed.
pub struct Subscription {
    cancel: Box<dyn Fn() + Send + Sync>,
}

impl Subscription {
    pub(crate) fn new<T: 'static>(listeners: &Arc<RwLock<ListenerSet<T>>>, id: u64) -> Self {
        let listeners = Arc::downgrade(listeners);
        Self {
            cancel: Box::new(move || {
                if let Some(listeners) = listeners.upgrade() {
                    listeners.write().unwrap().remove(id);
                }
            }),
        }
    }

    /// Remove the listener this handle was returned for.
    pub fn unsubscribe(&self) {
        (self.cancel)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_is_idempotent() {
        let mut set: ListenerSet<i32> = ListenerSet::new();
        let id = set.add(Box::new(|_, _| {}));
        assert_eq!(set.snapshot().len(), 1);

        set.remove(id);
        assert!(set.snapshot().is_empty());
        set.remove(id);
        assert!(set.snapshot().is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut set: ListenerSet<i32> = ListenerSet::new();
        let first = set.add(Box::new(|_, _| {}));
        set.clear();
        let second = set.add(Box::new(|_, _| {}));
        assert_ne!(first, second);
    }
}
