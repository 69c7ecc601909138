//! Client for the Câmara dos Deputados open-data API.

pub mod client;
pub mod models;

pub use client::{CamaraClient, CamaraError, DEFAULT_BASE_URL};
pub use models::{Deputado, FilterCriteria, PAGE_SIZE};
