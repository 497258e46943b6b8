//! Utilidades de validación
//!
//! Este módulo contiene la validación de forma de los requests de
//! entrada, antes de cualquier llamada externa.

use std::collections::HashSet;

use crate::dto::map_link_dto::MapLinkRequest;
use crate::dto::route_optimization_dto::{OptimizationRequest, Point, StartPosition};
use crate::utils::errors::{AppError, AppResult};

/// Validar un request de optimización
///
/// Rechaza listas de puntos vacías y designations duplicadas. La
/// designation es la clave de join contra los waypoints de HERE: con
/// duplicados la reconciliación multiplicaría puntos en la salida.
pub fn validate_optimization_request(request: &OptimizationRequest) -> AppResult<()> {
    if request.points.is_empty() {
        return Err(AppError::InvalidInput(
            "points must be a non-empty list".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for point in &request.points {
        if !seen.insert(point.designation.as_str()) {
            return Err(AppError::InvalidInput(format!(
                "duplicate designation '{}'",
                point.designation
            )));
        }
    }

    Ok(())
}

/// Validar un request de deep link y extraer sus campos obligatorios
///
/// El contrato pide exactamente el body `{"error": "Invalid input format"}`
/// para cualquier forma inválida, por eso un solo mensaje para todos
/// los casos.
pub fn validate_map_link_request(
    request: &MapLinkRequest,
) -> AppResult<(&StartPosition, &[Point])> {
    match (&request.uuid, &request.start_position, &request.points) {
        (Some(uuid), Some(start_position), Some(points))
            if !uuid.trim().is_empty() && !points.is_empty() =>
        {
            Ok((start_position, points.as_slice()))
        }
        _ => Err(AppError::InvalidInput("Invalid input format".to_string())),
    }
}
