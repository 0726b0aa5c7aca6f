//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación,
//! fechas, generación de IDs y el indicador de carga.

pub mod clock;
pub mod dates;
pub mod errors;
pub mod ids;
pub mod loading;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::AppError;
