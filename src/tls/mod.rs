//! TLS grade lookup with a bounded retry.
//!
//! The inspection service fills in the Mozilla grading result asynchronously, so a
//! first call often returns a report without it. The lookup retries with a fixed
//! delay and then reports the outcome of the *last* attempt:
//! - grading data found → the grade
//! - last attempt had no grading data → `TlsOutcome::Pending` (not an error)
//! - last attempt failed to fetch or decode → `ApiError::UpstreamUnavailable`

mod extract;

use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, info, warn};
use tokio_retry::strategy::FixedInterval;
use tokio_retry::Retry;

use crate::config::Config;
use crate::error_handling::{ApiError, FetchError};
use crate::fetch::get_json;

pub use extract::{find_mozilla_grade, TlsGrade};

/// Why a single attempt did not produce a grade.
#[derive(Debug)]
enum AttemptError {
    /// The call succeeded but the report has no Mozilla grading result yet
    NotGraded,
    /// The call itself failed
    Fetch(FetchError),
}

/// Outcome of a TLS grade lookup that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum TlsOutcome {
    /// Grading data was found
    Graded(TlsGrade),
    /// Every attempt succeeded but none carried grading data
    Pending,
}

/// Fetches the Mozilla TLS grade for `url`.
///
/// Makes up to `config.tls_retry_attempts` calls spaced by `config.tls_retry_delay()`,
/// stopping at the first report that contains grading data.
///
/// # Errors
///
/// Returns `ApiError::UpstreamUnavailable` when the final attempt failed with a
/// network, status or decode error.
pub async fn fetch_tls_grade(
    client: &reqwest::Client,
    config: &Config,
    url: &str,
) -> Result<TlsOutcome, ApiError> {
    let endpoint = config.webcheck_endpoint("tls");
    let endpoint = endpoint.as_str();
    let attempts = AtomicUsize::new(0);
    let attempts = &attempts;

    // The strategy yields one delay per retry; the initial attempt is not counted
    let strategy = FixedInterval::new(config.tls_retry_delay())
        .take(config.tls_retry_attempts.saturating_sub(1));

    let result = Retry::spawn(strategy, move || async move {
        let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("TLS attempt {} for {}", attempt, url);
        match get_json(client, endpoint, &[("url", url)]).await {
            Ok(report) => find_mozilla_grade(&report).ok_or(AttemptError::NotGraded),
            Err(e) => {
                warn!("TLS attempt {} for {} failed: {}", attempt, url, e);
                Err(AttemptError::Fetch(e))
            }
        }
    })
    .await;

    let made = attempts.load(Ordering::SeqCst);
    match result {
        Ok(grade) => {
            info!("TLS grade for {} found after {} attempt(s)", url, made);
            Ok(TlsOutcome::Graded(grade))
        }
        Err(AttemptError::NotGraded) => {
            info!("No TLS grading data for {} after {} attempt(s)", url, made);
            Ok(TlsOutcome::Pending)
        }
        Err(AttemptError::Fetch(e)) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::{Duration, Instant};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const DELAY_MS: u64 = 50;

    fn config_for(server: &MockServer) -> Config {
        Config {
            webcheck_url: format!("{}/api", server.uri()),
            tls_retry_delay_ms: DELAY_MS,
            ..Default::default()
        }
    }

    fn graded_report() -> serde_json::Value {
        json!({"analysis": [
            {"analyzer": "mozillaGradingWorker", "result": {"grade": 93, "lettergrade": "A"}}
        ]})
    }

    fn ungraded_report() -> serde_json::Value {
        json!({"analysis": [{"analyzer": "caaWorker", "result": {}}]})
    }

    #[tokio::test]
    async fn test_first_attempt_success_makes_single_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tls"))
            .and(query_param("url", "https://example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(graded_report()))
            .expect(1)
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let outcome = fetch_tls_grade(&client, &config_for(&server), "https://example.com")
            .await
            .unwrap();
        assert_eq!(
            outcome,
            TlsOutcome::Graded(TlsGrade {
                grade: json!(93),
                lettergrade: json!("A"),
            })
        );
    }

    #[tokio::test]
    async fn test_success_on_third_attempt() {
        let server = MockServer::start().await;
        // Mocks are matched in mount order; the first one is used up after two calls
        Mock::given(method("GET"))
            .and(path("/api/tls"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ungraded_report()))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/tls"))
            .respond_with(ResponseTemplate::new(200).set_body_json(graded_report()))
            .expect(1)
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let start = Instant::now();
        let outcome = fetch_tls_grade(&client, &config_for(&server), "https://example.com")
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(2 * DELAY_MS));
        assert!(matches!(outcome, TlsOutcome::Graded(_)));
    }

    #[tokio::test]
    async fn test_exhausted_without_grade_is_pending() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tls"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ungraded_report()))
            .expect(3)
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let outcome = fetch_tls_grade(&client, &config_for(&server), "https://example.com")
            .await
            .unwrap();
        assert_eq!(outcome, TlsOutcome::Pending);
    }

    #[tokio::test]
    async fn test_exhausted_with_fetch_error_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tls"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .expect(3)
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let err = fetch_tls_grade(&client, &config_for(&server), "https://example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::UpstreamUnavailable(_)));
    }

    #[tokio::test]
    async fn test_last_attempt_decides_outcome() {
        // Two failures followed by a report without grading data → pending, not an error
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tls"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/tls"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ungraded_report()))
            .expect(1)
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let outcome = fetch_tls_grade(&client, &config_for(&server), "https://example.com")
            .await
            .unwrap();
        assert_eq!(outcome, TlsOutcome::Pending);
    }

    #[tokio::test]
    async fn test_single_attempt_configuration_does_not_retry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tls"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ungraded_report()))
            .expect(1)
            .mount(&server)
            .await;

        let config = Config {
            tls_retry_attempts: 1,
            ..config_for(&server)
        };
        let client = reqwest::Client::new();
        let outcome = fetch_tls_grade(&client, &config, "https://example.com")
            .await
            .unwrap();
        assert_eq!(outcome, TlsOutcome::Pending);
    }
}
