//! HTTP server exposing the reconnaissance API.
//!
//! Provides the endpoints:
//! - `POST /api/scan` - firewall detection with bypass probe
//! - `POST /api/domains` - certificate-transparency domain enumeration
//! - `POST /api/whois` - WHOIS lookup
//! - `POST /api/tls` - Mozilla TLS grade
//! - `POST /api/server-info` - geolocation of the server's IP
//! - `POST /api/security` - scored HTTP-security report
//! - `GET /health` - liveness
//!
//! Every handler runs its outbound calls sequentially; no state is shared between
//! requests beyond the immutable configuration and the HTTP client.

mod handlers;
mod types;

use axum::routing::{get, post};
use axum::Router;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::initialization::init_client;
use handlers::{
    domains_handler, health_handler, scan_handler, security_handler, server_info_handler,
    tls_handler, whois_handler,
};
pub use types::AppState;

/// Builds the router with every route attached to `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/scan", post(scan_handler))
        .route("/api/domains", post(domains_handler))
        .route("/api/whois", post(whois_handler))
        .route("/api/tls", post(tls_handler))
        .route("/api/server-info", post(server_info_handler))
        .route("/api/security", post(security_handler))
        .with_state(state)
}

/// Creates the shared state and serves the API until Ctrl-C or SIGTERM.
pub async fn start_server(config: Config) -> Result<(), anyhow::Error> {
    let client = init_client(&config).map_err(InitializationError::from)?;
    let bind = config.bind.clone();

    log::info!("Inspection service: {}", config.webcheck_url);
    log::info!("Certificate search: {}", config.crtsh_url);
    log::info!("Geolocation service: {}", config.geolocation_url);

    let app = build_router(AppState::new(config, client));

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .map_err(|source| InitializationError::BindError {
            addr: bind.clone(),
            source,
        })?;

    log::info!("Server listening on http://{}/", bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    log::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C (or SIGTERM on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Shutdown signal received, finishing in-flight requests");
}
