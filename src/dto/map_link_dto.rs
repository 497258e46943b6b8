//! DTOs para generación de deep links de navegación
//!
//! Este módulo define el request/response de `POST /generate-map-url`
//! y el enum de proveedores de mapas soportados.

use serde::{Deserialize, Serialize};

use crate::dto::route_optimization_dto::{Point, StartPosition};

/// Proveedor de mapas para el deep link
///
/// Bing y Google son dos proveedores genuinamente distintos con
/// notaciones de URL incompatibles, no dos versiones del mismo formato.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapLinkProvider {
    Bing,
    Google,
}

impl MapLinkProvider {
    /// Parsear el nombre del proveedor (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bing" => Some(Self::Bing),
            "google" => Some(Self::Google),
            _ => None,
        }
    }
}

/// Request para generar un deep link
///
/// Los campos son opcionales a nivel de serde para que un payload
/// incompleto produzca el 400 "Invalid input format" del contrato,
/// no un rechazo genérico del framework.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLinkRequest {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub start_position: Option<StartPosition>,
    #[serde(default)]
    pub points: Option<Vec<Point>>,
    /// Override opcional del proveedor configurado por defecto
    #[serde(default)]
    pub provider: Option<MapLinkProvider>,
}

/// Response con el deep link generado
#[derive(Debug, Serialize)]
pub struct MapLinkResponse {
    #[serde(rename = "mapUrl")]
    pub map_url: String,
}
