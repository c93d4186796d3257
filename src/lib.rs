//! recon_gateway library: a JSON gateway over reconnaissance services
//!
//! This library receives a target URL or domain, forwards it to upstream services
//! (a Web-Check inspection service, a certificate-transparency search and an IP
//! geolocation service) and reshapes their answers:
//!
//! - firewall detection, with a bypass probe when none is reported
//! - distinct certificate names for a domain
//! - WHOIS pass-through
//! - Mozilla TLS grade, retried while the upstream is still grading
//! - server geolocation from the DNS-resolved IP
//! - a coarse score over the HTTP-security checks
//!
//! # Example
//!
//! ```no_run
//! use recon_gateway::{build_router, init_client, AppState, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     webcheck_url: "http://localhost:3000/api".to_string(),
//!     ..Default::default()
//! };
//! config.validate()?;
//!
//! let client = init_client(&config)?;
//! let app = build_router(AppState::new(config, client));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

mod app;
pub mod config;
mod dns;
mod domain;
pub mod error_handling;
mod fetch;
mod firewall;
mod geoip;
pub mod initialization;
mod security;
mod server;
mod tls;
mod whois;

// Re-export public API
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel};
pub use domain::DomainList;
pub use error_handling::ApiError;
pub use firewall::{FirewallResult, FirewallVerdict};
pub use initialization::{init_client, init_logger_with};
pub use security::{calculate_score, SecurityReport, SecurityScore};
pub use server::{build_router, start_server, AppState};
pub use tls::{TlsGrade, TlsOutcome};
