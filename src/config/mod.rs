//! Configuración del proyecto
//!
//! Variables de entorno y constantes de la aplicación.

pub mod app;
pub mod environment;

pub use environment::*;
