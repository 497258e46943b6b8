//! Controlador para deep links de navegación
//!
//! Este módulo maneja `POST /generate-map-url`. Sin llamadas de red:
//! validación más construcción de string.

use axum::{extract::State, response::Json};

use crate::dto::map_link_dto::{MapLinkRequest, MapLinkResponse};
use crate::services::map_link_service::MapLinkService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Generar un deep link de navegación a partir de puntos ya ordenados
pub async fn generate_map_url(
    State(state): State<AppState>,
    Json(request): Json<MapLinkRequest>,
) -> Result<Json<MapLinkResponse>, AppError> {
    let service = MapLinkService::new(state.config.map_provider);
    let response = service.generate(&request)?;

    log::info!("✅ Deep link generado para uuid {:?}", request.uuid);

    Ok(Json(response))
}
