//! Observable state stores.
//!
//! A [`Store`] holds one state value and a set of listeners. Writes install
//! a new value (by shallow merge or wholesale replacement) and then notify
//! every listener synchronously with the new and previous state.

mod store;
mod subscription;

pub use store::{create_store, Store};
pub use subscription::{Listener, Subscription};
