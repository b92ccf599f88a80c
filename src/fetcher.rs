//! Page fetcher
//!
//! The [`Fetcher`] trait is the seam between pagination and the network: one
//! call, one page, one `Result`. [`HttpFetcher`] is the real implementation;
//! tests swap in scripted fetchers.

use crate::config::PagerConfig;
use crate::error::{FetchError, FetchResult, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::provider::{self, NewsProvider};
use crate::types::FetchedPage;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Fetch a single page of normalized articles
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `page` (1-based). Every failure is returned, never raised.
    async fn fetch(&self, page: u32) -> FetchResult<FetchedPage>;
}

/// Fetcher backed by a provider mapping and an HTTP client
pub struct HttpFetcher {
    client: HttpClient,
    provider: Box<dyn NewsProvider>,
    api_key: Option<String>,
}

impl HttpFetcher {
    /// Create a fetcher from pager configuration
    pub fn from_config(config: &PagerConfig) -> Result<Self> {
        let mut http = HttpClientConfig::builder().base_url(config.effective_base_url());
        if let Some(timeout) = config.timeout() {
            http = http.timeout(timeout);
        }
        let client = HttpClient::with_config(http.build())?;

        Ok(Self::new(
            client,
            provider::from_config(config),
            config.api_key.clone(),
        ))
    }

    /// Create a fetcher from its parts
    pub fn new(
        client: HttpClient,
        provider: Box<dyn NewsProvider>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            provider,
            api_key,
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, page: u32) -> FetchResult<FetchedPage> {
        if page == 0 {
            return Err(FetchError::InvalidPage { page });
        }

        let Some(api_key) = self.api_key.as_deref().filter(|k| !k.is_empty()) else {
            warn!("API key is missing, skipping request");
            return Err(FetchError::config_missing("api_key"));
        };

        let request = self.provider.request(page, api_key);
        let body = self
            .client
            .get_json(self.provider.endpoint(), &request)
            .await?;
        let fetched = self.provider.decode(&body)?;

        debug!(
            "{} page {}: {} articles of {} total",
            self.provider.kind(),
            page,
            fetched.articles.len(),
            fetched.total_results
        );
        Ok(fetched)
    }
}

impl std::fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("client", &self.client)
            .field("provider", &self.provider.kind())
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}
