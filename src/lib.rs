// Library exports for integration tests and reusable components

pub mod camara;
pub mod config;
pub mod search;

// UI layer (hidden from docs)
#[doc(hidden)]
pub mod ui;
