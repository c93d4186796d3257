//! Error type definitions.
//!
//! This module defines the errors used throughout the gateway:
//! - `InitializationError` for startup failures
//! - `FetchError` for a single outbound call
//! - `ApiError` for what the caller finally sees

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde_json::json;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error binding the HTTP listener.
    #[error("Failed to bind HTTP server to {addr}: {source}")]
    BindError {
        /// Address that could not be bound
        addr: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Failure of one outbound call to an upstream service.
///
/// Kept narrow so callers can tell "the call failed" apart from "the call
/// succeeded but the data we wanted is not there" (see the TLS retry loop).
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, timeout or body-read failure.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),

    /// The body was not the JSON we expected.
    #[error("Failed to decode upstream response: {0}")]
    Decode(String),

    /// The upstream answered with a non-success status code.
    #[error("Upstream returned status {0}")]
    Status(u16),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

/// Caller-facing error. Rendered as `{"error": "<message>"}`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed required field (400).
    #[error("{0}")]
    InvalidInput(String),

    /// Non-success status from a dependency whose code is passed through.
    #[error("{message}")]
    UpstreamStatus {
        /// Status code returned by the upstream and forwarded to the caller
        status: u16,
        /// Message returned to the caller
        message: String,
    },

    /// Network, timeout or decode failure talking to a dependency (500).
    #[error("{0}")]
    UpstreamUnavailable(String),

    /// A derived value is absent, e.g. no IP address in the DNS report (404).
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    /// Create a new invalid-input error
    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new not-found error
    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        Self::NotFound(msg.into())
    }

    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::UpstreamStatus { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::UpstreamUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        ApiError::UpstreamUnavailable(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            log::error!("Request failed with {}: {}", status, message);
        } else {
            log::warn!("Request rejected with {}: {}", status, message);
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
