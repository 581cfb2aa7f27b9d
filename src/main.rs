//! hola-k8s server entry point.
//!
//! Resolves configuration from the environment, initializes tracing, builds the
//! Axum router and serves it until SIGTERM/SIGINT.

use hola_k8s::config::AppConfig;
use hola_k8s::http::start_server;
use hola_k8s::logging::{init_tracing, select_filter};
use hola_k8s::routes::create_router;
use hola_k8s::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env();

    // Initialize tracing with priority: RUST_LOG > LOG_LEVEL > default
    let log_filter = select_filter([std::env::var("RUST_LOG").ok(), Some(config.log_filter())]);
    init_tracing(&log_filter, config.logging.is_json());

    tracing::info!(
        port = %config.http.port,
        environment = %config.environment,
        log_level = %config.log_level,
        cors = config.enable_cors,
        "Loaded configuration"
    );
    tracing::debug!(config = ?config, "Resolved configuration snapshot");

    let state = AppState::new(config.clone());
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
