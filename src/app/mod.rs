//! Request validation shared by the HTTP handlers.

pub mod url;

// Re-export public API
pub use url::{require_field, validate_scan_url};
