//! Route Sequencing API
//!
//! Backend HTTP con dos endpoints: optimización de rutas vía HERE
//! Waypoints Sequence v8 y generación de deep links de navegación
//! (Bing/Google).

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
