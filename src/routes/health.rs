//! Health check endpoint for container orchestration.
//!
//! Liveness probe that returns 200 OK with the environment name and the time the
//! request was answered. Used by Kubernetes and load balancers to verify the
//! service is alive.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::state::AppState;

pub const HEALTH_STATUS: &str = "OK";
pub const HEALTH_MESSAGE: &str = "Backend funcionando!";

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub environment: String,
    /// ISO-8601 UTC with millisecond precision, e.g. `2026-10-18T09:30:00.125Z`
    pub timestamp: String,
}

/// Health check handler.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS,
        message: HEALTH_MESSAGE,
        environment: state.config.environment.clone(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
