//! DNS lookup through the inspection service.

mod extract;

use std::net::IpAddr;

use log::warn;

use crate::config::{Config, IP_NOT_FOUND_MESSAGE};
use crate::error_handling::ApiError;
use crate::fetch::get_json;

pub use extract::extract_ip;

/// Resolves the IP address of `url` using the inspection service's DNS check.
///
/// # Errors
///
/// - `ApiError::UpstreamUnavailable` if the DNS call fails
/// - `ApiError::NotFound` if the report holds no usable address
pub async fn resolve_ip(
    client: &reqwest::Client,
    config: &Config,
    url: &str,
) -> Result<IpAddr, ApiError> {
    let endpoint = config.webcheck_endpoint("dns");
    let report = get_json(client, &endpoint, &[("url", url)]).await?;

    extract_ip(&report).ok_or_else(|| {
        warn!("DNS report for {} contains no IP address", url);
        ApiError::not_found(IP_NOT_FOUND_MESSAGE)
    })
}
