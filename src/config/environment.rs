//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables
//! se leen una sola vez al arrancar el proceso; la configuración es
//! inmutable después y se comparte entre handlers concurrentes.

use std::env;

use crate::dto::map_link_dto::MapLinkProvider;

/// URL por defecto del endpoint de secuenciación de HERE
pub const DEFAULT_HERE_SEQUENCE_URL: &str = "https://wps.hereapi.com/v8/findsequence2";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    /// API key de HERE para findsequence2
    pub here_api_key: String,
    /// Endpoint de secuenciación (override para tests/staging)
    pub here_sequence_url: String,
    /// Timeout fijo del cliente HTTP en segundos. Un solo intento,
    /// sin retry.
    pub here_timeout_secs: u64,
    /// Proveedor de mapas por defecto para los deep links
    pub map_provider: MapLinkProvider,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            here_api_key: env::var("HERE_API_KEY").expect("HERE_API_KEY must be set"),
            here_sequence_url: env::var("HERE_SEQUENCE_URL")
                .unwrap_or_else(|_| DEFAULT_HERE_SEQUENCE_URL.to_string()),
            here_timeout_secs: env::var("HERE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("HERE_TIMEOUT_SECS must be a valid number"),
            map_provider: env::var("MAP_PROVIDER")
                .map(|value| {
                    MapLinkProvider::from_name(&value)
                        .expect("MAP_PROVIDER must be 'bing' or 'google'")
                })
                .unwrap_or(MapLinkProvider::Bing),
        }
    }
}

impl EnvironmentConfig {
    /// Obtener la dirección de bind del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
