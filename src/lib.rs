//! hola-k8s: a demo backend for Kubernetes deployments.
//!
//! Resolves a configuration snapshot from environment variables at startup and
//! serves read-only JSON views of it, plus a small client that displays the
//! greeting endpoint's message.

pub mod client;
pub mod config;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use routes::create_router;
pub use state::AppState;
