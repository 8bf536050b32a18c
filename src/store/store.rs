use std::sync::{Arc, RwLock};

use crate::state::State;

use super::subscription::{Listener, ListenerSet, Subscription};

/// A store holding one observable state value.
///
/// State is handed out as `Arc<T>` and replaced, never mutated in place.
/// Writes come in two flavors: merge-style ([`set`](Store::set),
/// [`set_with`](Store::set_with)) overlay a partial value onto the current
/// state, replace-style ([`replace`](Store::replace),
/// [`replace_with`](Store::replace_with)) install a value wholesale. Every
/// actual change notifies all listeners synchronously, in registration
/// order, before the write returns.
///
/// Cloning a `Store` clones the handle; both handles share the same state
/// and listener set.
pub struct Store<T> {
    state: Arc<RwLock<Option<Arc<T>>>>,
    listeners: Arc<RwLock<ListenerSet<T>>>,
}

/// Construct a store from an initializer.
///
/// The initializer runs exactly once, synchronously, and its return value
/// becomes the initial state. It receives the store under construction so
/// that it can capture a handle for later writes; reading state from inside
/// the initializer panics, since no state is installed yet.
///
/// ```
/// use ripple::{create_store, Record};
///
/// let store = create_store(|_store| Record::from([("count", 0)]));
/// assert_eq!(store.get_state()["count"], 0);
/// ```
pub fn create_store<T, F>(initializer: F) -> Store<T>
where
    T: Send + Sync + 'static,
    F: FnOnce(&Store<T>) -> T,
{
    let store = Store {
        state: Arc::new(RwLock::new(None)),
        listeners: Arc::new(RwLock::new(ListenerSet::new())),
    };
    let initial = initializer(&store);
    *store.state.write().unwrap() = Some(Arc::new(initial));
    store
}

impl<T: Send + Sync + 'static> Store<T> {
    /// Create a store with the given initial state.
    pub fn new(initial: T) -> Self {
        create_store(|_| initial)
    }

    /// Get the current state.
    pub fn get_state(&self) -> Arc<T> {
        self.state
            .read()
            .unwrap()
            .as_ref()
            .expect("state accessed before the store initializer returned")
            .clone()
    }

    /// Read the state with a function, without handing out an `Arc`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let state = self.get_state();
        f(&state)
    }

    /// Merge a partial value into the current state.
    ///
    /// Fields present in the partial overwrite their counterparts; every
    /// other field is retained. Merging always installs a fresh value, so
    /// every call notifies.
    pub fn set(&self, partial: T::Partial)
    where
        T: State,
    {
        self.update(|current| Arc::new(current.merge(partial)));
    }

    /// Updater form of [`set`](Store::set): the closure receives the
    /// current state and returns the partial to merge.
    pub fn set_with<F>(&self, updater: F)
    where
        T: State,
        F: FnOnce(&T) -> T::Partial,
    {
        self.update(|current| Arc::new(current.merge(updater(current.as_ref()))));
    }

    /// Replace the state wholesale, discarding the prior value.
    ///
    /// Passing back the handle returned by [`get_state`](Store::get_state)
    /// is the identity no-op: nothing changes and no listener runs. That
    /// pointer comparison is the only deduplication — equal-but-distinct
    /// values still count as a change.
    pub fn replace(&self, next: impl Into<Arc<T>>) {
        let next = next.into();
        self.update(move |_| next);
    }

    /// Updater form of [`replace`](Store::replace). Returning the handle
    /// it was given makes the write a no-op.
    pub fn replace_with<F>(&self, updater: F)
    where
        F: FnOnce(&Arc<T>) -> Arc<T>,
    {
        self.update(updater);
    }

    /// Subscribe to state changes.
    ///
    /// The listener runs synchronously after every actual change with the
    /// new and previous state. Listeners run in registration order; the set
    /// is snapshotted at dispatch time, so a listener removed mid-pass
    /// still runs in that pass and one added mid-pass first runs on the
    /// next. A panicking listener aborts delivery to the listeners after it
    /// and unwinds to the writer.
    ///
    /// Every call registers independently and returns its own
    /// [`Subscription`]; unsubscribing one registration leaves the others
    /// in place.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T, &T) + Send + Sync + 'static,
    {
        self.subscribe_listener(Box::new(listener))
    }

    pub(crate) fn subscribe_listener(&self, listener: Listener<T>) -> Subscription {
        let id = self.listeners.write().unwrap().add(listener);
        Subscription::new(&self.listeners, id)
    }

    /// Remove every listener.
    ///
    /// Later writes still update state but deliver to no one. The store
    /// remains readable, writable, and subscribable; destroy only severs
    /// the notifications in flight at the time of the call.
    pub fn destroy(&self) {
        self.listeners.write().unwrap().clear();
    }

    /// Install the updater's result and notify, unless it is the current
    /// value again.
    ///
    /// No lock is held while caller code (the updater or a listener) runs.
    /// A listener may therefore subscribe, unsubscribe, or write back into
    /// this store; a nested write completes its own notification pass
    /// before the outer pass resumes, and the outer pass's remaining
    /// listeners still receive the outer `(new, previous)` pair.
    fn update<F>(&self, updater: F)
    where
        F: FnOnce(&Arc<T>) -> Arc<T>,
    {
        let current = self.get_state();
        let next = updater(&current);
        if Arc::ptr_eq(&next, &current) {
            return;
        }
        *self.state.write().unwrap() = Some(Arc::clone(&next));
        self.notify(next.as_ref(), current.as_ref());
    }

    /// Invoke every listener present at dispatch time with `(new, previous)`.
    fn notify(&self, next: &T, previous: &T) {
        let snapshot = self.listeners.read().unwrap().snapshot();
        for listener in snapshot {
            listener(next, previous);
        }
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            listeners: Arc::clone(&self.listeners),
        }
    }
}
