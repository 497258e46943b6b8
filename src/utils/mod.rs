//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores y la validación de
//! requests de entrada.

pub mod errors;
pub mod validation;
