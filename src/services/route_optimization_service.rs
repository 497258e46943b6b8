//! Servicio para HERE Waypoints Sequence v8
//!
//! Este módulo construye la query de `findsequence2`, hace la llamada
//! al API de HERE y reconcilia la secuencia devuelta contra los puntos
//! de entrada.

use chrono::{DateTime, FixedOffset, Utc};
use reqwest::Client;

use crate::config::environment::EnvironmentConfig;
use crate::dto::here_dto::{HereSequenceResponse, HereSequenceResult};
use crate::dto::route_optimization_dto::{OptimizationRequest, OptimizationResult};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_optimization_request;

/// Modo de routing fijo: ruta más rápida, coche, con tráfico en vivo.
/// No es configurable por el caller.
const TRAVEL_MODE: &str = "fastest;car;traffic:enabled";

/// Directiva de clustering que se añade solo con minimizeStops:
/// agrupa paradas a menos de 500 m de distancia de conducción.
const CLUSTERING: &str = "clustering=drivingDistance:500";

pub struct RouteOptimizationService {
    api_key: String,
    sequence_url: String,
    client: Client,
}

impl RouteOptimizationService {
    pub fn new(config: &EnvironmentConfig, client: Client) -> Self {
        Self {
            api_key: config.here_api_key.clone(),
            sequence_url: config.here_sequence_url.clone(),
            client,
        }
    }

    /// Optimizar una ruta con HERE findsequence2
    ///
    /// Un solo GET, sin retry; el timeout es el del cliente compartido.
    pub async fn optimize(&self, request: OptimizationRequest) -> AppResult<OptimizationResult> {
        validate_optimization_request(&request)?;

        let departure = departure_timestamp(Utc::now());
        let url = self.build_sequence_url(&request, &departure);

        log::info!(
            "🗺️ Consultando HERE findsequence2 para {} puntos (uuid {})",
            request.points.len(),
            request.uuid
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            // El body del upstream se loguea pero nunca se devuelve
            // al caller.
            let body = response.text().await.unwrap_or_default();
            log::error!("❌ HERE respondió status {}: {}", status, body);
            return Err(AppError::UpstreamRequest(format!(
                "HERE API returned status {}",
                status
            )));
        }

        let sequence: HereSequenceResponse = response.json().await.map_err(|e| {
            AppError::MalformedUpstreamResponse(format!("invalid HERE response body: {}", e))
        })?;

        let result = map_sequence_response(sequence, request)?;

        log::info!(
            "✅ Ruta optimizada: {} paradas, {:.3} km, {:.1} min",
            result.points.len(),
            result.distance,
            result.duration
        );

        Ok(result)
    }

    /// Construir la URL completa de findsequence2
    ///
    /// Un parámetro `destination{i}` (1-based) por punto, en orden de
    /// entrada, con valor `designation;lat,lon` percent-encoded como un
    /// único valor opaco.
    pub fn build_sequence_url(&self, request: &OptimizationRequest, departure: &str) -> String {
        // Fuel gana sobre time cuando ambos flags están activos.
        let improve_for = if request.parameters.optimize_for_fuel {
            "distance"
        } else if request.parameters.optimize_for_time {
            "time"
        } else {
            "time"
        };

        let destinations = request
            .points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                format!(
                    "destination{}={}",
                    index + 1,
                    urlencoding::encode(&format!(
                        "{};{},{}",
                        point.designation, point.latitude, point.longitude
                    ))
                )
            })
            .collect::<Vec<_>>()
            .join("&");

        let mut url = format!(
            "{}?start={},{}&{}&improveFor={}&mode={}&departure={}",
            self.sequence_url,
            request.start_position.latitude,
            request.start_position.longitude,
            destinations,
            improve_for,
            TRAVEL_MODE,
            departure
        );

        if request.parameters.minimize_stops {
            url.push('&');
            url.push_str(CLUSTERING);
        }

        url.push_str("&apikey=");
        url.push_str(&self.api_key);
        url
    }
}

/// Timestamp de salida en UTC+1 fijo (sin horario de verano)
///
/// Formato `YYYY-MM-DDTHH:MM:SS` seguido del offset, con el `+` inicial
/// percent-encoded como `%2B` para que sobreviva dentro de la query.
/// Los offsets negativos pasan sin codificar.
pub fn departure_timestamp(now: DateTime<Utc>) -> String {
    let zone = FixedOffset::east_opt(3600).expect("UTC+1 is a valid offset");
    let local = now.with_timezone(&zone);

    let formatted = local.format("%Y-%m-%dT%H:%M:%S").to_string();
    let offset = local.format("%:z").to_string();
    let encoded_offset = match offset.strip_prefix('+') {
        Some(rest) => format!("%2B{}", rest),
        None => offset,
    };

    format!("{}{}", formatted, encoded_offset)
}

/// Reconciliar la respuesta de HERE contra los puntos de entrada
///
/// Cada waypoint después del índice 0 (el punto de partida) se une por
/// `id == designation` y recibe su posición 1-based como `order`. Un id
/// que no corresponde a ningún punto de entrada es un error de
/// reconciliación, no un drop silencioso.
pub fn map_sequence_response(
    response: HereSequenceResponse,
    request: OptimizationRequest,
) -> AppResult<OptimizationResult> {
    let result: HereSequenceResult = response.results.into_iter().next().ok_or_else(|| {
        AppError::MalformedUpstreamResponse("HERE response contains no results".to_string())
    })?;

    if result.waypoints.is_empty() {
        return Err(AppError::MalformedUpstreamResponse(
            "HERE response contains no waypoints".to_string(),
        ));
    }

    let mut points = Vec::with_capacity(result.waypoints.len() - 1);
    for (index, waypoint) in result.waypoints.iter().skip(1).enumerate() {
        let mut point = request
            .points
            .iter()
            .find(|p| p.designation == waypoint.id)
            .cloned()
            .ok_or_else(|| {
                AppError::MalformedUpstreamResponse(format!(
                    "waypoint '{}' does not match any input point",
                    waypoint.id
                ))
            })?;
        point.order = Some(index as i32 + 1);
        points.push(point);
    }

    Ok(OptimizationResult {
        uuid: request.uuid,
        distance: result.distance / 1000.0,
        duration: result.time / 60.0,
        start_position: request.start_position,
        parameters: request.parameters,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::route_optimization_dto::{OptimizationParameters, Point, StartPosition};
    use chrono::TimeZone;
    use serde_json::json;

    fn test_service() -> RouteOptimizationService {
        let config = EnvironmentConfig {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3000,
            here_api_key: "test-key".to_string(),
            here_sequence_url: "https://wps.hereapi.com/v8/findsequence2".to_string(),
            here_timeout_secs: 30,
            map_provider: crate::dto::map_link_dto::MapLinkProvider::Bing,
        };
        RouteOptimizationService::new(&config, Client::new())
    }

    fn point(designation: &str, latitude: f64, longitude: f64) -> Point {
        Point {
            designation: designation.to_string(),
            latitude,
            longitude,
            order: None,
        }
    }

    fn request_with(parameters: OptimizationParameters, points: Vec<Point>) -> OptimizationRequest {
        OptimizationRequest {
            uuid: "12345".to_string(),
            start_position: StartPosition {
                latitude: 34.052235,
                longitude: -118.243683,
            },
            parameters,
            points,
        }
    }

    #[test]
    fn test_one_destination_parameter_per_point_in_input_order() {
        let service = test_service();
        let request = request_with(
            OptimizationParameters::default(),
            vec![
                point("Point A", 34.052235, -118.243683),
                point("Point B", 34.052236, -118.243684),
                point("Point C", 34.052237, -118.243685),
            ],
        );

        let url = service.build_sequence_url(&request, "2026-01-15T13:00:00%2B01:00");

        let a = url.find("destination1=Point%20A%3B34.052235%2C-118.243683").unwrap();
        let b = url.find("destination2=Point%20B%3B34.052236%2C-118.243684").unwrap();
        let c = url.find("destination3=Point%20C%3B34.052237%2C-118.243685").unwrap();
        assert!(a < b && b < c);
        assert!(!url.contains("destination4"));
    }

    #[test]
    fn test_fuel_takes_priority_over_time() {
        let service = test_service();
        let request = request_with(
            OptimizationParameters {
                optimize_for_fuel: true,
                optimize_for_time: true,
                minimize_stops: false,
            },
            vec![point("Point A", 1.0, 2.0)],
        );

        let url = service.build_sequence_url(&request, "departure");
        assert!(url.contains("improveFor=distance"));
    }

    #[test]
    fn test_improve_for_defaults_to_time() {
        let service = test_service();
        let request = request_with(
            OptimizationParameters::default(),
            vec![point("Point A", 1.0, 2.0)],
        );

        let url = service.build_sequence_url(&request, "departure");
        assert!(url.contains("improveFor=time"));
    }

    #[test]
    fn test_minimize_stops_toggles_clustering() {
        let service = test_service();

        let without = request_with(
            OptimizationParameters::default(),
            vec![point("Point A", 1.0, 2.0)],
        );
        let url = service.build_sequence_url(&without, "departure");
        assert!(!url.contains("clustering"));

        let with = request_with(
            OptimizationParameters {
                optimize_for_fuel: false,
                optimize_for_time: false,
                minimize_stops: true,
            },
            vec![point("Point A", 1.0, 2.0)],
        );
        let url = service.build_sequence_url(&with, "departure");
        assert!(url.contains("&clustering=drivingDistance:500&"));
    }

    #[test]
    fn test_url_starts_with_base_and_start_and_ends_with_apikey() {
        let service = test_service();
        let request = request_with(
            OptimizationParameters::default(),
            vec![point("Point A", 1.0, 2.0)],
        );

        let url = service.build_sequence_url(&request, "departure");
        assert!(url
            .starts_with("https://wps.hereapi.com/v8/findsequence2?start=34.052235,-118.243683&"));
        assert!(url.contains("mode=fastest;car;traffic:enabled"));
        assert!(url.ends_with("&apikey=test-key"));
    }

    #[test]
    fn test_departure_timestamp_is_utc_plus_one_with_encoded_sign() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(departure_timestamp(now), "2026-01-15T13:00:00%2B01:00");
    }

    #[test]
    fn test_departure_timestamp_crosses_midnight() {
        let now = Utc.with_ymd_and_hms(2026, 8, 24, 23, 30, 5).unwrap();
        assert_eq!(departure_timestamp(now), "2026-08-25T00:30:05%2B01:00");
    }

    fn here_response(waypoint_ids: &[&str], distance: f64, time: f64) -> HereSequenceResponse {
        let waypoints: Vec<serde_json::Value> = waypoint_ids
            .iter()
            .map(|id| json!({"id": id}))
            .collect();
        serde_json::from_value(json!({
            "results": [{
                "waypoints": waypoints,
                "distance": distance,
                "time": time
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_order_reflects_upstream_sequence_not_input_sequence() {
        let request = request_with(
            OptimizationParameters::default(),
            vec![point("A", 1.0, 1.0), point("B", 2.0, 2.0)],
        );
        let response = here_response(&["start", "B", "A"], 1000.0, 60.0);

        let result = map_sequence_response(response, request).unwrap();

        assert_eq!(result.points.len(), 2);
        assert_eq!(result.points[0].designation, "B");
        assert_eq!(result.points[0].order, Some(1));
        assert_eq!(result.points[1].designation, "A");
        assert_eq!(result.points[1].order, Some(2));
    }

    #[test]
    fn test_distance_and_duration_conversion_keeps_full_precision() {
        let request = request_with(
            OptimizationParameters::default(),
            vec![point("A", 1.0, 1.0)],
        );
        let response = here_response(&["start", "A"], 12345.0, 600.0);

        let result = map_sequence_response(response, request).unwrap();

        assert_eq!(result.distance, 12.345);
        assert_eq!(result.duration, 10.0);
    }

    #[test]
    fn test_unknown_waypoint_id_is_a_reconciliation_error() {
        let request = request_with(
            OptimizationParameters::default(),
            vec![point("A", 1.0, 1.0)],
        );
        let response = here_response(&["start", "Z"], 1000.0, 60.0);

        let error = map_sequence_response(response, request).unwrap_err();
        assert!(matches!(error, AppError::MalformedUpstreamResponse(_)));
        assert!(error.to_string().contains("'Z'"));
    }

    #[test]
    fn test_empty_results_is_malformed_response() {
        let request = request_with(
            OptimizationParameters::default(),
            vec![point("A", 1.0, 1.0)],
        );
        let response: HereSequenceResponse =
            serde_json::from_value(json!({"results": []})).unwrap();

        let error = map_sequence_response(response, request).unwrap_err();
        assert!(matches!(error, AppError::MalformedUpstreamResponse(_)));
    }

    #[tokio::test]
    async fn test_duplicate_designations_rejected_before_any_network_call() {
        let service = test_service();
        let request = request_with(
            OptimizationParameters::default(),
            vec![point("A", 1.0, 1.0), point("A", 2.0, 2.0)],
        );

        let error = service.optimize(request).await.unwrap_err();
        assert!(matches!(error, AppError::InvalidInput(_)));
    }
}
