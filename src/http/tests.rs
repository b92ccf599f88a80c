//! Tests for the HTTP client module

use super::*;
use crate::error::FetchError;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert!(config.timeout.is_none());
    assert!(config.base_url.is_none());
    assert!(USER_AGENT.starts_with("headline-pager/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(60))
        .build();

    assert_eq!(config.base_url, Some("https://api.example.com".to_string()));
    assert_eq!(config.timeout, Some(Duration::from_secs(60)));
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("page", 1)
        .secret_query("apiKey", "abc");

    assert_eq!(
        config.query,
        vec![
            ("page".to_string(), "1".to_string()),
            ("apiKey".to_string(), "abc".to_string())
        ]
    );
    assert_eq!(config.secret_params, vec!["apiKey".to_string()]);
}

#[test]
fn test_build_url_joins_base_and_query() {
    let config = HttpClientConfig::builder()
        .base_url("https://newsapi.org/")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let url = client
        .build_url(
            "/v2/top-headlines",
            &RequestConfig::new().query("country", "us").query("page", 2),
        )
        .unwrap();

    assert_eq!(
        url.as_str(),
        "https://newsapi.org/v2/top-headlines?country=us&page=2"
    );
}

#[test]
fn test_build_url_absolute_path_ignores_base() {
    let config = HttpClientConfig::builder()
        .base_url("https://ignored.example.com")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let url = client
        .build_url("https://other.example.com/search", &RequestConfig::new())
        .unwrap();
    assert_eq!(url.as_str(), "https://other.example.com/search");
}

#[test]
fn test_build_url_without_base_is_invalid() {
    let client = HttpClient::new().unwrap();
    let result = client.build_url("/relative", &RequestConfig::new());
    assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
}

#[test]
fn test_redact_hides_secret_params() {
    let url = url::Url::parse("https://newsapi.org/v2/top-headlines?country=us&apiKey=s3cret&page=1")
        .unwrap();
    let shown = redact(&url, &["apiKey".to_string()]);
    assert!(!shown.contains("s3cret"));
    assert!(shown.contains("apiKey=HIDDEN"));
    assert!(shown.contains("country=us"));
    assert!(shown.contains("page=1"));
}

#[tokio::test]
async fn test_http_client_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": 42
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data = client
        .get_json("/api/data", &RequestConfig::new().query("page", 2))
        .await
        .unwrap();

    assert_eq!(data["value"], 42);
}

#[tokio::test]
async fn test_http_client_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_json("/api/data", &RequestConfig::new()).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_http_client_404_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_json("/api/missing", &RequestConfig::new()).await;

    assert!(matches!(
        result,
        Err(FetchError::HttpStatus { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_http_client_error_body_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/limited"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "status": "error",
            "code": "rateLimited",
            "message": "You have made too many requests recently."
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json("/api/limited", &RequestConfig::new())
        .await
        .unwrap_err();

    match err {
        FetchError::HttpStatus { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "You have made too many requests recently.");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_client_does_not_retry_server_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_json("/api/flaky", &RequestConfig::new()).await;

    assert!(matches!(
        result,
        Err(FetchError::HttpStatus { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_http_client_invalid_json_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_json("/api/html", &RequestConfig::new()).await;

    assert!(matches!(result, Err(FetchError::MalformedResponse { .. })));
}

#[tokio::test]
async fn test_http_client_connection_refused_is_transport() {
    // Nothing listens on port 1
    let config = HttpClientConfig::builder()
        .base_url("http://127.0.0.1:1")
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let result = client.get_json("/api", &RequestConfig::new()).await;

    assert!(matches!(result, Err(FetchError::Transport(_))));
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::new().unwrap();
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("config"));
}
