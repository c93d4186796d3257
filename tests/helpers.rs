// Shared helpers for the API integration tests.
//
// Every test drives the real router with `tower::ServiceExt::oneshot` and points the
// configuration at wiremock servers standing in for the upstream services.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use wiremock::MockServer;

use recon_gateway::{build_router, init_client, AppState, Config};

/// Retry delay used by tests; keeps the TLS retry loop fast.
pub const TEST_RETRY_DELAY_MS: u64 = 20;

/// The three upstream services, each backed by its own mock server.
pub struct Upstreams {
    pub webcheck: MockServer,
    pub crtsh: MockServer,
    pub geo: MockServer,
}

impl Upstreams {
    pub async fn start() -> Self {
        Self {
            webcheck: MockServer::start().await,
            crtsh: MockServer::start().await,
            geo: MockServer::start().await,
        }
    }

    pub fn config(&self) -> Config {
        Config {
            webcheck_url: format!("{}/api", self.webcheck.uri()),
            crtsh_url: self.crtsh.uri(),
            geolocation_url: format!("{}/json", self.geo.uri()),
            tls_retry_delay_ms: TEST_RETRY_DELAY_MS,
            timeout_seconds: 5,
            ..Default::default()
        }
    }

    pub fn router(&self) -> Router {
        let config = self.config();
        let client = init_client(&config).expect("Failed to build test HTTP client");
        build_router(AppState::new(config, client))
    }
}

/// Posts `body` verbatim as JSON and returns the status with the decoded response body.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Router failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let json = serde_json::from_slice(&bytes).expect("Response body is not JSON");
    (status, json)
}

/// Posts a JSON value and returns the status with the decoded response body.
pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, &body.to_string()).await
}
