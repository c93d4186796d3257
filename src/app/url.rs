//! Request field and URL validation.

use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use crate::config::{MAX_URL_LENGTH, SCAN_URL_PATTERN};
use crate::error_handling::ApiError;

static SCAN_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SCAN_URL_PATTERN).expect("SCAN_URL_PATTERN is a valid regex"));

/// Extracts a required request field.
///
/// A missing field, or one that is empty after trimming, is rejected with
/// `ApiError::InvalidInput` naming the field. The returned value is trimmed.
pub fn require_field(value: Option<String>, name: &str) -> Result<String, ApiError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ApiError::invalid_input(format!(
            "Missing required field '{}'",
            name
        ))),
    }
}

/// Validates a URL submitted for a firewall scan.
///
/// The URL must look like `https://<host>.<tld>[/path]` where the host holds only
/// alphanumerics, hyphens and dots and the TLD has at least two letters. URLs longer
/// than `MAX_URL_LENGTH` are rejected before matching.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` describing the expected shape.
pub fn validate_scan_url(url: &str) -> Result<(), ApiError> {
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            url.chars().take(50).collect::<String>()
        );
        return Err(ApiError::invalid_input(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }

    if !SCAN_URL_RE.is_match(url) {
        warn!("Rejecting malformed scan URL: {}", url);
        return Err(ApiError::invalid_input(
            "Invalid URL. Expected format: https://<domain>.<tld>[/path]",
        ));
    }

    Ok(())
}
