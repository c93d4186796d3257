//! Firewall bypass probe.
//!
//! Some deployments hide their firewall fingerprint on the base path but still show
//! it on arbitrary sub-paths (custom error pages). The probe requests a random
//! sub-path of the target and looks for the vendor marker in the body.

use log::{debug, info};
use rand::{distr::Alphanumeric, Rng};
use url::Url;

use crate::config::{FIREWALL_MARKER, PROBE_TOKEN_LENGTH};
use crate::fetch::get_text;

/// Generates a random URL-safe path segment.
pub fn random_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(PROBE_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Appends `segment` as a new last path segment of `url`.
///
/// A trailing empty segment (`https://host/` or `https://host/a/`) is replaced
/// rather than kept, so the result never contains `//`. Query and fragment are
/// dropped; the probe targets the path only.
///
/// Returns `None` if `url` does not parse or cannot have path segments.
pub fn append_path_segment(url: &str, segment: &str) -> Option<Url> {
    let mut parsed = Url::parse(url).ok()?;
    parsed.set_query(None);
    parsed.set_fragment(None);
    parsed
        .path_segments_mut()
        .ok()?
        .pop_if_empty()
        .push(segment);
    Some(parsed)
}

/// Returns `true` if `body` contains the firewall marker, ignoring case.
pub fn contains_marker(body: &str) -> bool {
    body.to_lowercase().contains(FIREWALL_MARKER)
}

/// Requests a random sub-path of `url` and reports whether the firewall marker shows up.
///
/// Every failure (bad URL, network error, unreadable body) counts as "not found".
pub async fn probe_for_marker(client: &reqwest::Client, url: &str) -> bool {
    let Some(probe_url) = append_path_segment(url, &random_token()) else {
        debug!("Cannot build probe URL from {}", url);
        return false;
    };

    match get_text(client, probe_url.as_str()).await {
        Ok(body) => {
            let found = contains_marker(&body);
            info!("Bypass probe on {}: marker found = {}", probe_url, found);
            found
        }
        Err(e) => {
            debug!("Bypass probe on {} failed, treating as not found: {}", probe_url, e);
            false
        }
    }
}
