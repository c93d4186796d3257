// whois/mod.rs
// WHOIS lookup forwarded to the inspection service

use log::{debug, warn};
use serde_json::Value;

use crate::config::Config;
use crate::error_handling::{ApiError, FetchError};
use crate::fetch::get_json;

/// Looks up WHOIS data for `domain` through the inspection service.
///
/// The upstream JSON is returned unchanged. A non-200 answer is passed through with
/// its status code and the message `Web-Check API returned status <code>`; network
/// and decode failures become a 500.
pub async fn lookup_whois(
    client: &reqwest::Client,
    config: &Config,
    domain: &str,
) -> Result<Value, ApiError> {
    let endpoint = config.webcheck_endpoint("whois");
    match get_json(client, &endpoint, &[("url", domain)]).await {
        Ok(value) => {
            debug!("WHOIS lookup succeeded for {}", domain);
            Ok(value)
        }
        Err(FetchError::Status(status)) => {
            warn!("WHOIS lookup for {} returned status {}", domain, status);
            Err(ApiError::UpstreamStatus {
                status,
                message: format!("Web-Check API returned status {}", status),
            })
        }
        Err(e) => Err(e.into()),
    }
}
