//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        source: std::net::AddrParseError,
    },

    /// Bind or accept failure reported by the server
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse the configured host and raw `PORT` value into a socket address.
pub fn listen_addr(config: &AppConfig) -> Result<SocketAddr, ServerError> {
    let addr = format!("{}:{}", config.http.host, config.http.port);
    addr.parse()
        .map_err(|source| ServerError::InvalidAddress { addr, source })
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = listen_addr(config)?;
    let handle = Handle::new();

    tracing::info!(%addr, "Starting HTTP server");

    shutdown::setup_shutdown_handler(handle.clone());

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_port(port: &str) -> AppConfig {
        let port = port.to_string();
        AppConfig::from_lookup(move |key| (key == "PORT").then(|| port.clone()))
    }

    #[test]
    fn test_listen_addr_default_port() {
        let addr = listen_addr(&config_with_port("")).unwrap();
        assert_eq!(addr, "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_listen_addr_custom_port() {
        let addr = listen_addr(&config_with_port("8080")).unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_listen_addr_rejects_non_numeric_port() {
        let err = listen_addr(&config_with_port("abc")).unwrap_err();
        assert!(matches!(err, ServerError::InvalidAddress { .. }));
        assert!(err.to_string().contains("0.0.0.0:abc"));
    }
}
