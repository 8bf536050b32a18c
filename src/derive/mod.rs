//! Derived stores.
//!
//! A derived store's state is a pure function of one or more source
//! stores, recomputed synchronously whenever any source changes. Build one
//! with the free [`derive`] function or the `derive`/`derive_with` methods
//! on [`Store`](crate::Store) and [`Derived`].

mod derive;

pub use derive::{derive, Derived, DynSource, Source};
