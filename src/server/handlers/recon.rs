//! Reconnaissance API handlers.
//!
//! Each handler validates its input, delegates to the matching module and turns the
//! result into JSON. Errors render themselves through `ApiError`.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use super::super::types::{parse_body, AppState, DomainRequest, UrlRequest};
use crate::app::require_field;
use crate::config::TLS_PENDING_MESSAGE;
use crate::domain::{enumerate_domains, DomainList};
use crate::error_handling::ApiError;
use crate::firewall::{scan_firewall, FirewallResult};
use crate::geoip::lookup_server_info;
use crate::security::{assess_security, SecurityReport};
use crate::tls::{fetch_tls_grade, TlsOutcome};
use crate::whois::lookup_whois;

/// `POST /api/scan` - firewall detection with bypass probe
pub async fn scan_handler(
    State(state): State<AppState>,
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> Result<Json<FirewallResult>, ApiError> {
    let url = require_field(parse_body(payload)?.url, "url")?;
    log::debug!("POST /api/scan url={}", url);
    let result = scan_firewall(&state.client, &state.config, &url).await?;
    Ok(Json(result))
}

/// `POST /api/domains` - certificate-transparency domain enumeration
pub async fn domains_handler(
    State(state): State<AppState>,
    payload: Result<Json<DomainRequest>, JsonRejection>,
) -> Result<Json<DomainList>, ApiError> {
    let domain = require_field(parse_body(payload)?.domain, "domain")?;
    log::debug!("POST /api/domains domain={}", domain);
    Ok(Json(
        enumerate_domains(&state.client, &state.config, &domain).await,
    ))
}

/// `POST /api/whois` - WHOIS pass-through
pub async fn whois_handler(
    State(state): State<AppState>,
    payload: Result<Json<DomainRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let domain = require_field(parse_body(payload)?.domain, "domain")?;
    log::debug!("POST /api/whois domain={}", domain);
    let whois = lookup_whois(&state.client, &state.config, &domain).await?;
    Ok(Json(whois))
}

/// `POST /api/tls` - Mozilla TLS grade with retry
///
/// Missing grading data after every attempt is a normal transient state and is
/// answered with 200 and an explanatory message.
pub async fn tls_handler(
    State(state): State<AppState>,
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let url = require_field(parse_body(payload)?.url, "url")?;
    log::debug!("POST /api/tls url={}", url);
    let response = match fetch_tls_grade(&state.client, &state.config, &url).await? {
        TlsOutcome::Graded(grade) => Json(grade).into_response(),
        TlsOutcome::Pending => {
            (StatusCode::OK, Json(json!({ "error": TLS_PENDING_MESSAGE }))).into_response()
        }
    };
    Ok(response)
}

/// `POST /api/server-info` - DNS → geolocation chain
pub async fn server_info_handler(
    State(state): State<AppState>,
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let url = require_field(parse_body(payload)?.url, "url")?;
    log::debug!("POST /api/server-info url={}", url);
    let info = lookup_server_info(&state.client, &state.config, &url).await?;
    Ok(Json(info))
}

/// `POST /api/security` - scored HTTP-security report
pub async fn security_handler(
    State(state): State<AppState>,
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> Result<Json<SecurityReport>, ApiError> {
    let url = require_field(parse_body(payload)?.url, "url")?;
    log::debug!("POST /api/security url={}", url);
    let report = assess_security(&state.client, &state.config, &url).await?;
    Ok(Json(report))
}
