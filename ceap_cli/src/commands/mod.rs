pub mod bancada;
pub mod deputados;
