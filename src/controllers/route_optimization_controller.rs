//! Controlador para optimización de rutas
//!
//! Este módulo maneja `POST /optimize-route`: delega en el servicio de
//! HERE y deja que AppError traduzca cualquier fallo al status y body
//! del contrato.

use axum::{extract::State, response::Json};

use crate::dto::route_optimization_dto::{OptimizationRequest, OptimizationResult};
use crate::services::route_optimization_service::RouteOptimizationService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Optimizar una ruta usando HERE findsequence2
pub async fn optimize_route(
    State(state): State<AppState>,
    Json(request): Json<OptimizationRequest>,
) -> Result<Json<OptimizationResult>, AppError> {
    log::info!(
        "🎯 Solicitud de optimización {} con {} puntos",
        request.uuid,
        request.points.len()
    );

    let service = RouteOptimizationService::new(&state.config, state.http_client.clone());
    let result = service.optimize(request).await?;

    Ok(Json(result))
}
