//! Registro de rutas de la API

use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::json;

use crate::controllers::{map_link_controller, route_optimization_controller};
use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/optimize-route",
            post(route_optimization_controller::optimize_route),
        )
        .route(
            "/generate-map-url",
            post(map_link_controller::generate_map_url),
        )
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "route-sequencing",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
