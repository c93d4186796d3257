//! Firewall detection with a bypass probe.
//!
//! The inspection service's firewall check is authoritative when it reports a
//! firewall. When it reports none, a bypass probe looks for the BunkerWeb marker on a
//! random sub-path of the target.

mod probe;

use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

use crate::app::validate_scan_url;
use crate::config::Config;
use crate::error_handling::ApiError;
use crate::fetch::get_json;

use probe::probe_for_marker;

/// Verdict produced when the bypass probe ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FirewallVerdict {
    /// Whether a firewall was detected
    pub firewall: bool,
    /// Whether the BunkerWeb marker was found on the probed sub-path
    pub bunkerity_found: bool,
}

impl FirewallVerdict {
    fn from_probe(found: bool) -> Self {
        Self {
            firewall: found,
            bunkerity_found: found,
        }
    }
}

/// Result of a firewall scan: either the upstream payload or the probe verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FirewallResult {
    /// The inspection service reported a firewall (or anything but `false`); payload unchanged
    Upstream(Value),
    /// The inspection service reported `firewall: false` and the probe ran
    Probed(FirewallVerdict),
}

/// Returns `true` only when the payload's `firewall` field is exactly boolean `false`.
fn reports_no_firewall(payload: &Value) -> bool {
    matches!(payload.get("firewall"), Some(Value::Bool(false)))
}

/// Scans `url` for a web application firewall.
///
/// # Errors
///
/// - `ApiError::InvalidInput` if `url` does not look like `https://<host>.<tld>[/path]`;
///   no outbound call is made in that case
/// - `ApiError::UpstreamUnavailable` if the inspection service call fails
///
/// Failures of the bypass probe are never errors; they count as "marker not found".
pub async fn scan_firewall(
    client: &reqwest::Client,
    config: &Config,
    url: &str,
) -> Result<FirewallResult, ApiError> {
    validate_scan_url(url)?;

    let endpoint = config.webcheck_endpoint("firewall");
    let payload = get_json(client, &endpoint, &[("url", url)]).await?;

    if !reports_no_firewall(&payload) {
        debug!("Inspection service reported a firewall for {}", url);
        return Ok(FirewallResult::Upstream(payload));
    }

    info!("No firewall reported for {}, running bypass probe", url);
    let found = probe_for_marker(client, url).await;
    Ok(FirewallResult::Probed(FirewallVerdict::from_probe(found)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reports_no_firewall_only_for_exact_false() {
        assert!(reports_no_firewall(&json!({"firewall": false})));
        assert!(!reports_no_firewall(&json!({"firewall": true})));
        assert!(!reports_no_firewall(&json!({"firewall": "false"})));
        assert!(!reports_no_firewall(&json!({"firewall": 0})));
        assert!(!reports_no_firewall(&json!({"firewall": null})));
        assert!(!reports_no_firewall(&json!({})));
        assert!(!reports_no_firewall(&json!([false])));
    }

    #[test]
    fn test_verdict_serialization() {
        let value = serde_json::to_value(FirewallResult::Probed(FirewallVerdict::from_probe(true)))
            .unwrap();
        assert_eq!(value, json!({"firewall": true, "bunkerity_found": true}));

        let value = serde_json::to_value(FirewallResult::Probed(FirewallVerdict::from_probe(false)))
            .unwrap();
        assert_eq!(value, json!({"firewall": false, "bunkerity_found": false}));
    }

    #[test]
    fn test_upstream_payload_serializes_unchanged() {
        let payload = json!({"firewall": true, "waf": "Cloudflare", "hasWaf": true});
        let value = serde_json::to_value(FirewallResult::Upstream(payload.clone())).unwrap();
        assert_eq!(value, payload);
    }

    #[tokio::test]
    async fn test_scan_firewall_rejects_invalid_url_without_network() {
        // Unroutable upstream: any outbound call would fail with a network error instead
        let config = Config {
            webcheck_url: "http://127.0.0.1:9/api".to_string(),
            ..Default::default()
        };
        let client = reqwest::Client::new();
        let err = scan_firewall(&client, &config, "ftp://example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }
}
