pub mod app;
pub mod components;
pub mod context;

pub use app::{make_config, App, MAIN_CSS};
pub use context::{DeputadosContext, DeputadosProvider};
