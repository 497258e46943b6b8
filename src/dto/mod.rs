//! DTOs de la API
//!
//! Este módulo define las estructuras de datos que entran y salen
//! por HTTP, más los DTOs del API externo de HERE.

pub mod here_dto;
pub mod map_link_dto;
pub mod route_optimization_dto;
