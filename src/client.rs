//! Display client for the greeting endpoint.
//!
//! Fetches `/api/mensaje` once and renders the `mensaje` field. While the
//! request is in flight a loading placeholder is shown; if it fails the error is
//! logged and the message area is left blank. There is no retry.

use std::fmt;

use serde::Deserialize;

use crate::config::LOADING_PLACEHOLDER;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {0}")]
    Status(reqwest::StatusCode),
}

/// The part of the greeting payload the client cares about.
#[derive(Debug, Deserialize)]
pub struct MensajeBody {
    pub mensaje: String,
}

/// What the client currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Message(String),
    /// Fetch failed; nothing is shown.
    Blank,
}

impl DisplayState {
    /// Final state for a completed fetch, logging the failure if there was one.
    pub fn from_result(result: Result<String, ClientError>) -> Self {
        match result {
            Ok(mensaje) => DisplayState::Message(mensaje),
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch greeting");
                DisplayState::Blank
            }
        }
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayState::Loading => f.write_str(LOADING_PLACEHOLDER),
            DisplayState::Message(mensaje) => f.write_str(mensaje),
            DisplayState::Blank => Ok(()),
        }
    }
}

/// GET the greeting endpoint and return its `mensaje` field.
pub async fn fetch_mensaje(client: &reqwest::Client, url: &str) -> Result<String, ClientError> {
    tracing::debug!(%url, "Fetching greeting");

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status(status));
    }

    let body: MensajeBody = response.json().await?;
    Ok(body.mensaje)
}
