//! Configuration types and CLI options.
//!
//! This module defines the enums and the `Config` struct used for command-line and
//! environment parsing. A `Config` is built once at startup and never mutated.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use url::Url;

use crate::config::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_CRTSH_URL, DEFAULT_GEOLOCATION_URL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, DEFAULT_WEBCHECK_URL, TLS_RETRY_DELAY_MS, TLS_RETRY_MAX_ATTEMPTS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Gateway configuration.
///
/// Every field can be set from the command line; the three upstream base URLs and
/// the listen address can also come from the environment (or a `.env` file).
///
/// # Examples
///
/// ```no_run
/// use recon_gateway::Config;
///
/// let config = Config {
///     webcheck_url: "http://localhost:3000/api".to_string(),
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "recon_gateway", version, about)]
pub struct Config {
    /// Base URL of the Web-Check inspection service API
    #[arg(long, env = "WEBCHECK_API_URL", default_value = DEFAULT_WEBCHECK_URL)]
    pub webcheck_url: String,

    /// Base URL of the certificate-transparency search service
    #[arg(long, env = "CRTSH_URL", default_value = DEFAULT_CRTSH_URL)]
    pub crtsh_url: String,

    /// Base URL of the IP geolocation service
    #[arg(long, env = "GEOLOCATION_API_URL", default_value = DEFAULT_GEOLOCATION_URL)]
    pub geolocation_url: String,

    /// Address the HTTP server listens on
    #[arg(long, env = "RECON_GATEWAY_BIND", default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    /// Per-request timeout for outbound calls, in seconds
    #[arg(long, env = "RECON_GATEWAY_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Total number of attempts when fetching TLS grading data
    #[arg(long, default_value_t = TLS_RETRY_MAX_ATTEMPTS)]
    pub tls_retry_attempts: usize,

    /// Delay between TLS grading attempts, in milliseconds
    #[arg(long, default_value_t = TLS_RETRY_DELAY_MS)]
    pub tls_retry_delay_ms: u64,

    /// HTTP User-Agent header value for outbound requests
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webcheck_url: DEFAULT_WEBCHECK_URL.to_string(),
            crtsh_url: DEFAULT_CRTSH_URL.to_string(),
            geolocation_url: DEFAULT_GEOLOCATION_URL.to_string(),
            bind: DEFAULT_BIND_ADDR.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            tls_retry_attempts: TLS_RETRY_MAX_ATTEMPTS,
            tls_retry_delay_ms: TLS_RETRY_DELAY_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid configuration for '{field}': {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is expected instead
    pub message: String,
}

impl Config {
    /// Checks that the configuration is usable before the server starts.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigValidationError` naming the first invalid field:
    /// - a base URL that does not parse or is not http(s)
    /// - a zero timeout
    /// - zero TLS attempts
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (field, value) in [
            ("webcheck_url", &self.webcheck_url),
            ("crtsh_url", &self.crtsh_url),
            ("geolocation_url", &self.geolocation_url),
        ] {
            validate_base_url(field, value)?;
        }

        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }

        if self.tls_retry_attempts == 0 {
            return Err(ConfigValidationError {
                field: "tls_retry_attempts",
                message: "must be greater than 0 (1 disables retries)".to_string(),
            });
        }

        Ok(())
    }

    /// Per-request timeout for outbound calls.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Fixed delay between TLS grading attempts.
    pub fn tls_retry_delay(&self) -> Duration {
        Duration::from_millis(self.tls_retry_delay_ms)
    }

    /// Builds an inspection-service endpoint URL, e.g. `webcheck_endpoint("tls")`.
    pub fn webcheck_endpoint(&self, check: &str) -> String {
        join_base(&self.webcheck_url, check)
    }

    /// Builds the geolocation lookup URL for an IP address.
    pub fn geolocation_endpoint(&self, ip: &str) -> String {
        join_base(&self.geolocation_url, ip)
    }

    /// Builds the certificate-transparency search URL (query parameters are added by the caller).
    pub fn crtsh_endpoint(&self) -> String {
        join_base(&self.crtsh_url, "")
    }
}

fn join_base(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

fn validate_base_url(field: &'static str, value: &str) -> Result<(), ConfigValidationError> {
    let parsed = Url::parse(value).map_err(|e| ConfigValidationError {
        field,
        message: format!(
            "'{}' is not a valid URL ({}); expected e.g. http://host:port/path",
            value, e
        ),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigValidationError {
            field,
            message: format!(
                "unsupported scheme '{}' (only http:// and https:// allowed)",
                scheme
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.webcheck_url, "http://webcheck:3000/api");
        assert_eq!(config.crtsh_url, "https://crt.sh");
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.tls_retry_attempts, 3);
        assert_eq!(config.tls_retry_delay(), Duration::from_secs(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_parse_matches_default() {
        // No flags and no env overrides in the test environment for these fields
        let parsed = Config::parse_from(["recon_gateway", "--webcheck-url", "http://localhost:3000/api"]);
        assert_eq!(parsed.webcheck_url, "http://localhost:3000/api");
        assert_eq!(parsed.tls_retry_attempts, TLS_RETRY_MAX_ATTEMPTS);
        assert_eq!(parsed.tls_retry_delay_ms, TLS_RETRY_DELAY_MS);
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = Config {
            crtsh_url: "not a url".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "crtsh_url");
        assert!(err.message.contains("not a valid URL"));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = Config {
            geolocation_url: "ftp://geo.example.com".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "geolocation_url");
        assert!(err.message.contains("ftp"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout_and_attempts() {
        let config = Config {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "timeout_seconds");

        let config = Config {
            tls_retry_attempts: 0,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "tls_retry_attempts");
    }

    #[test]
    fn test_endpoints_trim_trailing_slash() {
        let config = Config {
            webcheck_url: "http://webcheck:3000/api/".to_string(),
            geolocation_url: "http://ip-api.com/json/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.webcheck_endpoint("firewall"), "http://webcheck:3000/api/firewall");
        assert_eq!(config.geolocation_endpoint("1.2.3.4"), "http://ip-api.com/json/1.2.3.4");
        assert_eq!(config.crtsh_endpoint(), "https://crt.sh/");
    }
}
