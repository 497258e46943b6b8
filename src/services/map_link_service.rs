//! Servicio de deep links de navegación
//!
//! Este módulo renderiza URLs de navegación de Bing o Google a partir
//! de una lista de puntos ya ordenada. Construcción pura de strings,
//! sin llamadas de red.

use crate::dto::map_link_dto::{MapLinkProvider, MapLinkRequest, MapLinkResponse};
use crate::dto::route_optimization_dto::{Point, StartPosition};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_map_link_request;

pub struct MapLinkService {
    default_provider: MapLinkProvider,
}

impl MapLinkService {
    pub fn new(default_provider: MapLinkProvider) -> Self {
        Self { default_provider }
    }

    /// Generar el deep link para un request validado
    pub fn generate(&self, request: &MapLinkRequest) -> AppResult<MapLinkResponse> {
        let (start_position, points) = validate_map_link_request(request)?;
        let provider = request.provider.unwrap_or(self.default_provider);

        log::info!(
            "🧭 Generando deep link {:?} para {} puntos",
            provider,
            points.len()
        );

        // Orden ascendente por `order`; un punto sin `order` cuenta
        // como 0 y queda primero. sort_by_key es estable, así que los
        // empates conservan el orden de entrada.
        let mut ordered: Vec<&Point> = points.iter().collect();
        ordered.sort_by_key(|p| p.order.unwrap_or(0));

        let map_url = match provider {
            MapLinkProvider::Bing => build_bing_url(start_position, &ordered)?,
            MapLinkProvider::Google => build_google_url(start_position, &ordered)?,
        };

        Ok(MapLinkResponse { map_url })
    }
}

/// URL estilo Bing: origen y puntos concatenados como segmentos
/// `~pos.{lat}_{lon}` en el parámetro rtp, coma reemplazada por guión
/// bajo. El último segmento es el destino.
fn build_bing_url(start_position: &StartPosition, ordered: &[&Point]) -> AppResult<String> {
    if ordered.is_empty() {
        return Err(AppError::InvalidInput("Invalid input format".to_string()));
    }

    let mut url = format!(
        "https://www.bing.com/maps?rtp=pos.{}_{}",
        start_position.latitude, start_position.longitude
    );
    for point in ordered {
        url.push_str(&format!("~pos.{}_{}", point.latitude, point.longitude));
    }

    Ok(url)
}

/// URL estilo Google Directions: parámetros `origin`, `destination` y
/// `waypoints` separados por pipe, notación `lat,lon`. El último punto
/// ordenado es el destino; el resto son waypoints intermedios.
fn build_google_url(start_position: &StartPosition, ordered: &[&Point]) -> AppResult<String> {
    let Some((destination, waypoints)) = ordered.split_last() else {
        return Err(AppError::InvalidInput("Invalid input format".to_string()));
    };

    let mut url = format!(
        "https://www.google.com/maps/dir/?api=1&origin={},{}&destination={},{}",
        start_position.latitude,
        start_position.longitude,
        destination.latitude,
        destination.longitude
    );

    if !waypoints.is_empty() {
        let joined = waypoints
            .iter()
            .map(|p| format!("{},{}", p.latitude, p.longitude))
            .collect::<Vec<_>>()
            .join("|");
        url.push_str("&waypoints=");
        url.push_str(&joined);
    }

    url.push_str("&travelmode=driving");
    Ok(url)
}
