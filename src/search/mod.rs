//! Explicit state container for the search screen.

pub mod state;

pub use state::{RequestId, SearchState};
