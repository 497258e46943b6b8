//! Services module
//!
//! Este módulo contiene la lógica de negocio: la integración con la
//! API de secuenciación de HERE y la generación de deep links de
//! navegación.

pub mod map_link_service;
pub mod route_optimization_service;
