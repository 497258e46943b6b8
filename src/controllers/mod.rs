//! Controladores HTTP
//!
//! Este módulo contiene los handlers de Axum. Los controladores son
//! finos: validan vía los servicios y convierten errores a respuestas.

pub mod map_link_controller;
pub mod route_optimization_controller;
