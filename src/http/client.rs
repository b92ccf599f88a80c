//! Single-shot HTTP client
//!
//! Provides the one GET a page fetch is allowed to make:
//! - URL assembly against a base URL
//! - Credential query parameters that are redacted in logs
//! - Status classification into [`FetchError`]
//! - JSON body parsing
//!
//! No retries and no caching; a failed request is reported as-is.

use crate::error::{Error, FetchError, FetchResult, Result};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("headline-pager/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: Option<String>,
    /// Request timeout (none by default)
    pub timeout: Option<Duration>,
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters, in order
    pub query: Vec<(String, String)>,
    /// Names of query parameters whose values are hidden in logs
    pub secret_params: Vec<String>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Add a query parameter that must not appear in logs
    #[must_use]
    pub fn secret_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        self.secret_params.push(key.clone());
        self.query.push((key, value.into()));
        self
    }
}

/// HTTP client that performs exactly one request per call
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(Error::HttpClient)?;

        Ok(Self { client, config })
    }

    /// Make a GET request; non-2xx statuses become [`FetchError::HttpStatus`]
    pub async fn get_with_config(&self, path: &str, config: &RequestConfig) -> FetchResult<Response> {
        let url = self.build_url(path, config)?;
        debug!("GET {}", redact(&url, &config.secret_params));

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Request failed with {}: {}", status.as_u16(), body);
            return Err(FetchError::http_status(
                status.as_u16(),
                error_message(&body).unwrap_or_else(|| status.to_string()),
            ));
        }

        debug!("Request succeeded: {}", status.as_u16());
        Ok(response)
    }

    /// Make a GET request and parse the JSON body
    pub async fn get_json(&self, path: &str, config: &RequestConfig) -> FetchResult<Value> {
        let response = self.get_with_config(path, config).await?;
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| FetchError::malformed(format!("Failed to parse JSON: {e}")))
    }

    /// Build the full URL with query parameters applied
    pub fn build_url(&self, path: &str, config: &RequestConfig) -> FetchResult<Url> {
        let joined = if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            match &self.config.base_url {
                Some(base) => {
                    let base = base.trim_end_matches('/');
                    let path = path.trim_start_matches('/');
                    format!("{base}/{path}")
                }
                None => path.to_string(),
            }
        };

        let mut url = Url::parse(&joined)?;
        if !config.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&config.query);
        }
        Ok(url)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Render a URL with the named query parameters replaced by `HIDDEN`
pub fn redact(url: &Url, secret_params: &[String]) -> String {
    if secret_params.is_empty() {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if secret_params.iter().any(|s| s.as_str() == k) {
                "HIDDEN".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();

    let mut shown = url.clone();
    shown.query_pairs_mut().clear().extend_pairs(&pairs);
    shown.to_string()
}

/// Pull a human message out of an error body, if it has one
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.pointer("/response/message"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
