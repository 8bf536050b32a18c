//! State values and shallow merging.
//!
//! Stores are generic over their state type. The [`State`] trait describes
//! how a partial update overlays onto a current value, and [`Record`] is a
//! ready-made insertion-ordered key-value shape for state without a fixed
//! struct.

mod record;
mod state;

pub use record::Record;
pub use state::State;
