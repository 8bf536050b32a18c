use std::sync::{Arc, Mutex};

use crate::store::{create_store, Listener, Store, Subscription};

/// Read-and-subscribe surface shared by root and derived stores.
///
/// Derivation is generic over its sources through this trait: anything that
/// can report its current state and deliver change notifications can feed a
/// derived store.
pub trait Source<T>: Send + Sync {
    /// The source's current state.
    fn get_state(&self) -> Arc<T>;

    /// Attach a change listener to the source.
    fn subscribe(&self, listener: Listener<T>) -> Subscription;
}

/// A shared, type-erased source handle, as passed to [`derive`].
pub type DynSource<T> = Arc<dyn Source<T>>;

impl<T: Send + Sync + 'static> Source<T> for Store<T> {
    fn get_state(&self) -> Arc<T> {
        Store::get_state(self)
    }

    fn subscribe(&self, listener: Listener<T>) -> Subscription {
        self.subscribe_listener(listener)
    }
}

impl<T: Send + Sync + 'static> Source<T> for Derived<T> {
    fn get_state(&self) -> Arc<T> {
        Derived::get_state(self)
    }

    fn subscribe(&self, listener: Listener<T>) -> Subscription {
        self.inner.subscribe_listener(listener)
    }
}

/// A store whose state is a pure function of one or more source stores.
///
/// Derived stores are built by [`derive`] (or the `derive`/`derive_with`
/// methods) and cannot be written to directly — only source changes update
/// them. They read, subscribe, and chain into further derivations exactly
/// like root stores; [`destroy`](Derived::destroy) detaches them from
/// their sources.
///
/// Cloning a `Derived` clones the handle.
pub struct Derived<T> {
    inner: Store<T>,
    forwarders: Arc<Mutex<Vec<Subscription>>>,
}

impl<T: Send + Sync + 'static> Derived<T> {
    /// Get the current derived state.
    pub fn get_state(&self) -> Arc<T> {
        self.inner.get_state()
    }

    /// Read the derived state with a function, without handing out an `Arc`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.with(f)
    }

    /// Subscribe to changes of the derived state.
    ///
    /// Same contract as [`Store::subscribe`].
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T, &T) + Send + Sync + 'static,
    {
        self.inner.subscribe(listener)
    }

    /// Detach from every source, then drop this store's own listeners.
    ///
    /// Recomputation and notification cease; the sources and their other
    /// subscribers are unaffected. The last computed state stays readable.
    pub fn destroy(&self) {
        for subscription in self.forwarders.lock().unwrap().drain(..) {
            subscription.unsubscribe();
        }
        self.inner.destroy();
    }
}

impl<T: Clone + Send + Sync + 'static> Derived<T> {
    /// This store as a type-erased derivation source.
    pub fn as_source(&self) -> DynSource<T> {
        Arc::new(self.clone())
    }

    /// Derive a store from this one alone.
    ///
    /// Same contract as [`Store::derive`].
    pub fn derive<U, P, I>(&self, projection: P) -> Derived<U>
    where
        U: Send + Sync + 'static,
        P: Fn(&T) -> I + Send + Sync + 'static,
        I: FnOnce() -> U,
    {
        derive(vec![self.as_source()], move |states: &[Arc<T>]| {
            projection(states[0].as_ref())
        })
    }

    /// Derive a store from this one plus `others`, this store's state
    /// first.
    ///
    /// Same contract as [`Store::derive_with`].
    pub fn derive_with<U, P, I>(&self, others: Vec<DynSource<T>>, projection: P) -> Derived<U>
    where
        U: Send + Sync + 'static,
        P: Fn(&[Arc<T>]) -> I + Send + Sync + 'static,
        I: FnOnce() -> U,
    {
        let mut sources = Vec::with_capacity(others.len() + 1);
        sources.push(self.as_source());
        sources.extend(others);
        derive(sources, projection)
    }
}

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            forwarders: Arc::clone(&self.forwarders),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Store<T> {
    /// This store as a type-erased derivation source.
    pub fn as_source(&self) -> DynSource<T> {
        Arc::new(self.clone())
    }

    /// Derive a store from this one alone.
    ///
    /// The projection is called with this store's state and returns the
    /// zero-argument producer of the derived state:
    ///
    /// ```
    /// use ripple::{Record, Store};
    ///
    /// let store = Store::new(Record::from([("x", 2), ("y", 3)]));
    /// let doubled = store.derive(|state: &Record<i64>| {
    ///     let state = state.clone();
    ///     move || state.iter().map(|(k, v)| (k, v * 2)).collect::<Record<i64>>()
    /// });
    ///
    /// assert_eq!(*doubled.get_state(), Record::from([("x", 4), ("y", 6)]));
    /// store.set(Record::from([("x", 5)]));
    /// assert_eq!(doubled.get_state()["x"], 10);
    /// ```
    pub fn derive<U, P, I>(&self, projection: P) -> Derived<U>
    where
        U: Send + Sync + 'static,
        P: Fn(&T) -> I + Send + Sync + 'static,
        I: FnOnce() -> U,
    {
        derive(vec![self.as_source()], move |states: &[Arc<T>]| {
            projection(states[0].as_ref())
        })
    }

    /// Derive a store from this one plus `others`, this store's state
    /// first.
    pub fn derive_with<U, P, I>(&self, others: Vec<DynSource<T>>, projection: P) -> Derived<U>
    where
        U: Send + Sync + 'static,
        P: Fn(&[Arc<T>]) -> I + Send + Sync + 'static,
        I: FnOnce() -> U,
    {
        let mut sources = Vec::with_capacity(others.len() + 1);
        sources.push(self.as_source());
        sources.extend(others);
        derive(sources, projection)
    }
}

/// Build a store computed from one or more source stores.
///
/// The projection is called with the sources' current states, in source
/// order, and returns a zero-argument closure producing the derived state;
/// that closure seeds the new store as its initializer. Afterwards, every
/// change to source `i` re-applies the projection with that source's new
/// state in position `i` and a fresh read of every other source, and the
/// result replaces the derived state wholesale. N source changes trigger N
/// independent recomputations; a no-op source write triggers none.
///
/// # Panics
///
/// Panics if `sources` is empty.
pub fn derive<S, T, P, I>(sources: Vec<DynSource<S>>, projection: P) -> Derived<T>
where
    S: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
    P: Fn(&[Arc<S>]) -> I + Send + Sync + 'static,
    I: FnOnce() -> T,
{
    assert!(
        !sources.is_empty(),
        "derive requires at least one source store"
    );

    let states: Vec<Arc<S>> = sources.iter().map(|source| source.get_state()).collect();
    let initializer = projection(&states);
    let store = create_store(|_| initializer());

    let projection = Arc::new(projection);
    let forwarders = sources
        .iter()
        .enumerate()
        .map(|(i, source)| {
            let sources = sources.clone();
            let projection = Arc::clone(&projection);
            let store = store.clone();
            source.subscribe(Box::new(move |next: &S, _previous: &S| {
                let next = Arc::new(next.clone());
                let states: Vec<Arc<S>> = sources
                    .iter()
                    .enumerate()
                    .map(|(j, other)| {
                        if i == j {
                            Arc::clone(&next)
                        } else {
                            other.get_state()
                        }
                    })
                    .collect();
                let initializer = projection(&states);
                store.replace(initializer());
            }))
        })
        .collect();

    Derived {
        inner: store,
        forwarders: Arc::new(Mutex::new(forwarders)),
    }
}
