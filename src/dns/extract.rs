//! IP address extraction from an inspection-service DNS report.
//!
//! The report comes in more than one shape. Extractors are tried in order and the
//! first one yielding a parseable IP address wins:
//! 1. `A.address`, when `A` is an object (`{"A": {"address": "1.2.3.4", "family": 4}}`)
//! 2. top-level `address` (`{"address": "1.2.3.4"}`)

use std::net::IpAddr;

use serde_json::Value;

/// A single way of pulling an address string out of a DNS report.
type Extractor = fn(&Value) -> Option<&str>;

const EXTRACTORS: &[(&str, Extractor)] = &[
    ("A.address", nested_a_record),
    ("address", top_level_address),
];

fn nested_a_record(report: &Value) -> Option<&str> {
    report.get("A")?.as_object()?.get("address")?.as_str()
}

fn top_level_address(report: &Value) -> Option<&str> {
    report.get("address")?.as_str()
}

/// Extracts the IP address from a DNS report.
///
/// Returns `None` if no extractor yields a string that parses as an IPv4 or IPv6
/// address.
pub fn extract_ip(report: &Value) -> Option<IpAddr> {
    EXTRACTORS.iter().find_map(|(field, extract)| {
        let ip: IpAddr = extract(report)?.trim().parse().ok()?;
        log::debug!("Resolved IP {} from DNS field '{}'", ip, field);
        Some(ip)
    })
}
