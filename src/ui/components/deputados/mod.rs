mod form;
mod item;
mod list;
mod page;
mod status;

pub use page::DeputadosPage;
