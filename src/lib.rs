// Biblioteca raíz del crate `msmlplan`.
// El núcleo (`algorithm`) es puro; `excel` y `reporte` hacen el IO alrededor.
pub mod algorithm;
pub mod config;
pub mod error;
pub mod excel;
pub mod models;
pub mod reporte;

pub use config::Config;
pub use error::{MsmlError, Result};
pub use reporte::ejecutar;
