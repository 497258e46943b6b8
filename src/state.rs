//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. No hay estado mutable entre requests:
//! solo la configuración inmutable y el cliente HTTP compartido.

use std::time::Duration;

use reqwest::Client;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub http_client: Client,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        // Timeout fijo: la llamada a HERE es el único punto de bloqueo
        // por request y no debe quedar sin límite.
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.here_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }
}
