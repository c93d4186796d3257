//! Configuration constants.
//!
//! This module defines the constants used throughout the gateway: upstream defaults,
//! timeouts, retry parameters and the fixed identifiers the response shapers look for.

// Upstream defaults (overridable via CLI flags or environment variables)
/// Default base URL of the Web-Check inspection service API.
pub const DEFAULT_WEBCHECK_URL: &str = "http://webcheck:3000/api";
/// Default base URL of the certificate-transparency search service.
pub const DEFAULT_CRTSH_URL: &str = "https://crt.sh";
/// Default base URL of the IP geolocation service. The IP is appended as a path segment.
pub const DEFAULT_GEOLOCATION_URL: &str = "http://ip-api.com/json";
/// Default listen address for the HTTP server.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

// Network operation timeouts
/// Per-request timeout for every outbound call, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for outbound requests.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// URL validation
/// Maximum accepted URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;
/// Shape every URL submitted to `/api/scan` must have: `https://<host>.<tld>[/path]`.
pub const SCAN_URL_PATTERN: &str = r"^https://[A-Za-z0-9.-]+\.[A-Za-z]{2,}(/.*)?$";

// Firewall bypass probe
/// Marker identifying the BunkerWeb firewall in a response body (matched case-insensitively).
pub const FIREWALL_MARKER: &str = "bunkerweb";
/// Length of the random path segment appended during the bypass probe.
/// 12 alphanumeric characters carry roughly 71 bits of entropy.
pub const PROBE_TOKEN_LENGTH: usize = 12;

// TLS grading retry strategy
/// Analyzer identifier of the Mozilla grading worker in the inspection service's TLS report
pub const MOZILLA_GRADING_ANALYZER: &str = "mozillaGradingWorker";
/// Total number of TLS attempts (initial attempt + 2 retries)
pub const TLS_RETRY_MAX_ATTEMPTS: usize = 3;
/// Fixed delay between TLS attempts in milliseconds
pub const TLS_RETRY_DELAY_MS: u64 = 2000;
/// Message returned (with 200) when no attempt produced grading data.
pub const TLS_PENDING_MESSAGE: &str = "TLS grading data not available yet, please try again later";

// Security score thresholds (number of failed checks)
/// Highest failed-check count still rated `OK`
pub const SCORE_OK_MAX_FAILURES: usize = 2;
/// Failed-check count rated `MOYEN`; anything above is `KO`
pub const SCORE_MOYEN_FAILURES: usize = 3;

/// Message returned when no IP address can be derived from the DNS report.
pub const IP_NOT_FOUND_MESSAGE: &str = "Failed to retrieve IP address.";
