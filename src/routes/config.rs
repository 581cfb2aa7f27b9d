//! Configuration projection endpoint.
//!
//! Exposes the CORS flag and database port, but not the database user or
//! password. This differs from the greeting endpoint's projection, which shows
//! the user and hides the port; both shapes are part of the public contract.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::AppConfig;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub environment: String,
    pub log_level: String,
    pub cors: bool,
    pub database: ConfigDatabase,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigDatabase {
    pub host: String,
    /// Raw value of `DATABASE_PORT`, never parsed
    pub port: String,
    pub name: String,
}

impl From<&AppConfig> for ConfigResponse {
    fn from(config: &AppConfig) -> Self {
        Self {
            environment: config.environment.clone(),
            log_level: config.log_level.clone(),
            cors: config.enable_cors,
            database: ConfigDatabase {
                host: config.database.host.clone(),
                port: config.database.port.clone(),
                name: config.database.name.clone(),
            },
        }
    }
}

/// Configuration handler.
pub async fn show(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse::from(state.config.as_ref()))
}
