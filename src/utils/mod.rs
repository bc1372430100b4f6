//! Utilidades del sistema
//!
//! Manejo de errores y reglas de validación comunes.

pub mod errors;
pub mod validation;
