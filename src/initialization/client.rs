//! HTTP client initialization.

use std::time::Duration;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};
use reqwest::ClientBuilder;

/// Initializes the shared HTTP client used for every outbound call.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Per-request timeout from the configuration (10s by default)
/// - TCP connect timeout (`TCP_CONNECT_TIMEOUT_SECS`)
/// - Redirect following enabled (reqwest default, up to 10 hops)
///
/// The client is cheap to clone; clones share one connection pool.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(config.timeout())
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .user_agent(config.user_agent.clone())
        .build()
}
