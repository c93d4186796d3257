//! Error handling.
//!
//! This module provides the error types used across the gateway. Upstream failures are
//! captured per call as `FetchError` and converted at the call site into the
//! caller-facing `ApiError`, which renders itself as an `{"error": ...}` JSON body.
//!
//! Error kinds and their HTTP mapping:
//! - **InvalidInput**: missing/malformed required field (400)
//! - **UpstreamStatus**: upstream status passed through (WHOIS)
//! - **UpstreamUnavailable**: network/timeout/decode failure (500)
//! - **NotFound**: derived value absent, e.g. no IP resolved (404)
//!
//! Degraded results (domain enumeration) are not errors and never reach this module.

mod types;

// Re-export public API
pub use types::{ApiError, FetchError, InitializationError};
