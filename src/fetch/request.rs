//! GET request execution.

use log::debug;
use reqwest::StatusCode;
use serde_json::Value;

use crate::error_handling::FetchError;

/// Issues a GET request and decodes the body as JSON.
///
/// # Arguments
///
/// * `client` - Shared HTTP client (carries the per-request timeout)
/// * `url` - Endpoint to call
/// * `query` - Query parameters, URL-encoded by reqwest
///
/// # Errors
///
/// - `FetchError::Network` if the request or the body read fails
/// - `FetchError::Status` if the upstream answers with anything but 200
/// - `FetchError::Decode` if the body is not valid JSON
pub async fn get_json(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<Value, FetchError> {
    debug!("GET {} {:?}", url, query);
    let response = client.get(url).query(query).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        debug!("GET {} returned status {}", url, status);
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    let value = serde_json::from_str(&body)?;
    Ok(value)
}

/// Issues a plain GET request and returns the body as text, whatever the status.
///
/// Error pages are returned like any other body; only transport failures are errors.
pub async fn get_text(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    debug!("GET {}", url);
    let response = client.get(url).send().await?;
    debug!("GET {} returned status {}", url, response.status());
    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_json_sends_query_and_decodes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/whois"))
            .and(query_param("url", "example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/api/whois", server.uri());
        let value = get_json(&client, &url, &[("url", "example.com")])
            .await
            .unwrap();
        assert_eq!(value["ok"], true);
    }

    #[tokio::test]
    async fn test_get_json_non_200_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let err = get_json(&client, &server.uri(), &[]).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(503)));
    }

    #[tokio::test]
    async fn test_get_json_invalid_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let err = get_json(&client, &server.uri(), &[]).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_get_json_connection_refused_is_network_error() {
        // Bind then drop a listener so the port is known to be closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = reqwest::Client::new();
        let err = get_json(&client, &format!("http://{}/", addr), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }

    #[tokio::test]
    async fn test_get_text_returns_error_page_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("Blocked by BunkerWeb"))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let body = get_text(&client, &server.uri()).await.unwrap();
        assert_eq!(body, "Blocked by BunkerWeb");
    }
}
