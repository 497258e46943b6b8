//! DTOs para optimización de rutas
//!
//! Este módulo define las estructuras del request/response de
//! `POST /optimize-route`. Los nombres del wire son camelCase
//! por compatibilidad con el frontend existente.

use serde::{Deserialize, Serialize};

/// Posición de partida de la ruta
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartPosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// Punto de entrega
///
/// `designation` es la clave de identidad: debe ser única dentro de un
/// request porque se usa para reconciliar los waypoints que devuelve HERE.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Point {
    pub designation: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Orden de visita 1-based. Se ignora en la entrada de optimización
    /// y se asigna en la salida según la secuencia optimizada.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

/// Parámetros de optimización
///
/// Flags que se influyen entre sí: fuel tiene prioridad sobre time si
/// ambos están activos; minimizeStops activa el clustering de HERE.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationParameters {
    #[serde(default)]
    pub optimize_for_fuel: bool,
    #[serde(default)]
    pub optimize_for_time: bool,
    #[serde(default)]
    pub minimize_stops: bool,
}

/// Request de optimización de ruta
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRequest {
    pub uuid: String,
    pub start_position: StartPosition,
    #[serde(default)]
    pub parameters: OptimizationParameters,
    #[serde(default)]
    pub points: Vec<Point>,
}

/// Resultado de optimización
///
/// `distance` en kilómetros y `duration` en minutos, ambos con la
/// precisión completa de la división (sin redondeo).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub uuid: String,
    pub distance: f64,
    pub duration: f64,
    pub start_position: StartPosition,
    pub parameters: OptimizationParameters,
    pub points: Vec<Point>,
}
