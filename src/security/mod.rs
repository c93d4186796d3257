//! HTTP-security report and score.
//!
//! Fetches the inspection service's HTTP-security report (a mapping of check name to
//! result) and derives a coarse score from the number of failed checks.

mod score;

use log::info;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error_handling::ApiError;
use crate::fetch::get_json;

pub use score::{calculate_score, SecurityScore};

/// Scored HTTP-security report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityReport {
    /// URL that was checked
    pub url: String,
    /// Coarse score
    pub score: SecurityScore,
    /// Upstream report, verbatim
    pub report: Value,
}

/// Fetches and scores the HTTP-security report for `url`.
///
/// # Errors
///
/// Returns `ApiError::UpstreamUnavailable` if the inspection service call fails.
pub async fn assess_security(
    client: &reqwest::Client,
    config: &Config,
    url: &str,
) -> Result<SecurityReport, ApiError> {
    let endpoint = config.webcheck_endpoint("http-security");
    let report = get_json(client, &endpoint, &[("url", url)]).await?;

    let score = calculate_score(&report);
    info!("Security score for {}: {}", url, score);

    Ok(SecurityReport {
        url: url.to_string(),
        score,
        report,
    })
}
