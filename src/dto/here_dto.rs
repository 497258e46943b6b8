//! DTOs para HERE Waypoints Sequence v8
//!
//! Este módulo define las estructuras de la respuesta del endpoint
//! `findsequence2` de HERE.

use serde::{Deserialize, Deserializer};

/// Respuesta completa de findsequence2
#[derive(Debug, Deserialize)]
pub struct HereSequenceResponse {
    #[serde(default)]
    pub results: Vec<HereSequenceResult>,
}

/// Una solución de secuenciación
#[derive(Debug, Deserialize)]
pub struct HereSequenceResult {
    /// Secuencia optimizada de visita. El índice 0 es el punto de partida.
    pub waypoints: Vec<HereWaypoint>,
    /// Distancia total en metros
    #[serde(deserialize_with = "f64_from_number_or_string")]
    pub distance: f64,
    /// Duración total en segundos
    #[serde(deserialize_with = "f64_from_number_or_string")]
    pub time: f64,
}

/// Waypoint dentro de la secuencia optimizada
///
/// `id` es el identificador opaco que el caller envió como parte del
/// parámetro `destination{i}` (la `designation` del punto).
#[derive(Debug, Deserialize)]
pub struct HereWaypoint {
    pub id: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub sequence: Option<u32>,
}

/// HERE devuelve `distance` y `time` como strings JSON en algunas
/// respuestas de findsequence2; aceptar ambas representaciones.
fn f64_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::String(value) => value
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid numeric string: {}", e))),
    }
}
