//! Domain enumeration from certificate-transparency logs.
//!
//! Queries the certificate search service for every non-expired certificate logged
//! for a domain and returns the distinct `name_value` entries. This endpoint degrades
//! silently: any upstream problem yields an empty list, never an error.

use std::collections::BTreeSet;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error_handling::FetchError;
use crate::fetch::get_json;

/// One certificate entry as returned by the search service (only the field we use).
#[derive(Debug, Deserialize)]
struct CertificateEntry {
    name_value: Option<String>,
}

/// Distinct names found in certificate-transparency logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainList {
    /// Number of distinct names
    pub count: usize,
    /// Distinct names, sorted
    pub domains: Vec<String>,
}

impl DomainList {
    fn from_names(names: BTreeSet<String>) -> Self {
        Self {
            count: names.len(),
            domains: names.into_iter().collect(),
        }
    }
}

/// Collapses the `name_value` of every entry into a sorted set.
fn collect_names(entries: Vec<CertificateEntry>) -> BTreeSet<String> {
    entries.into_iter().filter_map(|e| e.name_value).collect()
}

async fn fetch_entries(
    client: &reqwest::Client,
    config: &Config,
    domain: &str,
) -> Result<Vec<CertificateEntry>, FetchError> {
    let endpoint = config.crtsh_endpoint();
    let value = get_json(
        client,
        &endpoint,
        &[("q", domain), ("exclude", "expired"), ("output", "json")],
    )
    .await?;
    Ok(serde_json::from_value(value)?)
}

/// Enumerates the names logged in certificates for `domain`.
///
/// Returns an empty `DomainList` when the search service answers with a non-200
/// status or when the call or decoding fails.
pub async fn enumerate_domains(
    client: &reqwest::Client,
    config: &Config,
    domain: &str,
) -> DomainList {
    match fetch_entries(client, config, domain).await {
        Ok(entries) => {
            let list = DomainList::from_names(collect_names(entries));
            info!("Found {} distinct certificate names for {}", list.count, domain);
            list
        }
        Err(e) => {
            warn!(
                "Certificate search failed for {}, returning empty result: {}",
                domain, e
            );
            DomainList::default()
        }
    }
}
