//! Server information via the DNS → geolocation chain.
//!
//! Resolves the target's IP address with the inspection service, then asks the
//! geolocation service about that address. The geolocation payload is returned
//! unchanged.

use log::info;
use serde_json::Value;

use crate::config::Config;
use crate::dns::resolve_ip;
use crate::error_handling::ApiError;
use crate::fetch::get_json;

/// Looks up location and hosting metadata for the server behind `url`.
///
/// # Errors
///
/// - `ApiError::NotFound` if no IP address can be derived (the geolocation service is
///   not called)
/// - `ApiError::UpstreamUnavailable` if either call fails
pub async fn lookup_server_info(
    client: &reqwest::Client,
    config: &Config,
    url: &str,
) -> Result<Value, ApiError> {
    let ip = resolve_ip(client, config, url).await?;
    info!("Looking up geolocation for {} ({})", url, ip);

    let endpoint = config.geolocation_endpoint(&ip.to_string());
    Ok(get_json(client, &endpoint, &[]).await?)
}
