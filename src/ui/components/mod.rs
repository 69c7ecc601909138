pub mod deputados;

pub use deputados::DeputadosPage;
