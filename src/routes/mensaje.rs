//! Greeting endpoint consumed by the display client.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::AppConfig;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct MensajeResponse {
    pub mensaje: String,
    pub config: MensajeConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MensajeConfig {
    pub environment: String,
    pub log_level: String,
    pub database: MensajeDatabase,
}

/// Database projection for the greeting: port and password are left out.
#[derive(Debug, Clone, Serialize)]
pub struct MensajeDatabase {
    pub host: String,
    pub name: String,
    pub user: String,
}

/// Greeting text for an environment.
pub fn greeting(environment: &str) -> String {
    format!("Hola desde Kubernetes - Ambiente: {}!", environment)
}

impl From<&AppConfig> for MensajeResponse {
    fn from(config: &AppConfig) -> Self {
        Self {
            mensaje: greeting(&config.environment),
            config: MensajeConfig {
                environment: config.environment.clone(),
                log_level: config.log_level.clone(),
                database: MensajeDatabase {
                    host: config.database.host.clone(),
                    name: config.database.name.clone(),
                    user: config.database.user.clone(),
                },
            },
        }
    }
}

/// Greeting handler.
pub async fn mensaje(State(state): State<AppState>) -> Json<MensajeResponse> {
    Json(MensajeResponse::from(state.config.as_ref()))
}
