//! Health handler.

use axum::Json;

use super::super::types::HealthResponse;

/// Liveness endpoint; makes no outbound call
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
