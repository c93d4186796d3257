//! HTTP handlers.

mod health;
mod recon;

pub use health::health_handler;
pub use recon::{
    domains_handler, scan_handler, security_handler, server_info_handler, tls_handler,
    whois_handler,
};
