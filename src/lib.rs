//! # Ripple
//!
//! Observable state stores with derived state.
//!
//! Ripple provides two cooperating pieces for managing application state:
//!
//! ## Stores
//!
//! A [`Store<T>`] holds one state value and notifies its subscribers
//! synchronously whenever the value changes:
//! - merge-style writes ([`set`](Store::set)) overlay a partial value onto
//!   the current state
//! - replace-style writes ([`replace`](Store::replace)) install a value
//!   wholesale
//! - [`subscribe`](Store::subscribe) returns a [`Subscription`] handle that
//!   detaches the listener again
//!
//! State shapes are described by the [`State`] trait; [`Record`] is a
//! ready-made insertion-ordered key-value shape.
//!
//! ## Derived stores
//!
//! [`derive`] builds a [`Derived`] store whose state is a pure function of
//! one or more source stores, recomputed synchronously whenever any source
//! changes. Derived stores chain and combine freely with root stores.
//!
//! ```
//! use ripple::{Record, Store};
//!
//! let store = Store::new(Record::from([("x", 2), ("y", 3), ("z", 4)]));
//!
//! let square = store.derive(|state: &Record<i64>| {
//!     let state = state.clone();
//!     move || state.iter().map(|(k, v)| (k, v * v)).collect::<Record<i64>>()
//! });
//! assert_eq!(*square.get_state(), Record::from([("x", 4), ("y", 9), ("z", 16)]));
//!
//! store.set(Record::from([("x", 5)]));
//! assert_eq!(*square.get_state(), Record::from([("x", 25), ("y", 9), ("z", 16)]));
//! ```

pub mod derive;
pub mod state;
pub mod store;

// Re-export main types for convenience
pub use derive::{derive, Derived, DynSource, Source};
pub use state::{Record, State};
pub use store::{create_store, Listener, Store, Subscription};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        // Basic smoke test
        let store = Store::new(Record::from([("count", 0)]));
        store.set(Record::from([("count", 42)]));
        assert_eq!(store.get_state()["count"], 42);
    }
}
