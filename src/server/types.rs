//! Server data structures.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error_handling::ApiError;

/// Shared state for the HTTP handlers.
///
/// Both fields are read-only: the configuration is fixed at startup and the client
/// only shares its connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Immutable gateway configuration
    pub config: Arc<Config>,
    /// Shared outbound HTTP client
    pub client: reqwest::Client,
}

impl AppState {
    /// Wraps a configuration and a client into handler state.
    pub fn new(config: Config, client: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }
}

/// Request body for the URL-based endpoints.
#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    /// Target URL
    pub url: Option<String>,
}

/// Request body for the domain-based endpoints.
#[derive(Debug, Deserialize)]
pub struct DomainRequest {
    /// Target domain
    pub domain: Option<String>,
}

/// JSON response for `/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the server answers
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
}

/// Unwraps a JSON body, turning axum's rejection (bad JSON, wrong content type)
/// into an `InvalidInput` error with a JSON body.
pub fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        ApiError::invalid_input(format!("Invalid request body: {}", rejection.body_text()))
    })
}
