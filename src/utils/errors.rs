//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores de la aplicación y su
//! conversión a respuestas HTTP. Los bodies de error son parte del
//! contrato con el frontend y no deben cambiar de forma.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// El payload del caller no cumple la forma requerida
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// La llamada saliente a HERE falló a nivel transporte/HTTP
    #[error("Upstream request error: {0}")]
    UpstreamRequest(String),

    /// HERE respondió éxito pero el body no tiene los campos esperados
    #[error("Malformed upstream response: {0}")]
    MalformedUpstreamResponse(String),

    /// Cualquier otro fallo inesperado
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Todos los fallos se loguean server-side; los detalles del
        // upstream nunca se filtran al caller.
        let (status, error_response) = match self {
            AppError::InvalidInput(msg) => {
                log::warn!("⚠️ Invalid input: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorResponse { error: msg })
            }

            AppError::UpstreamRequest(msg) => {
                log::error!("❌ HTTP Request Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "HTTP Request Error".to_string(),
                    },
                )
            }

            AppError::MalformedUpstreamResponse(msg) => {
                log::error!("❌ Malformed upstream response: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorResponse { error: msg })
            }

            AppError::Internal(msg) => {
                log::error!("❌ Unexpected error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Error optimizing route".to_string(),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::UpstreamRequest(e.to_string())
    }
}
