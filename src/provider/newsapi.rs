//! NewsAPI top-headlines mapping
//!
//! Response shape: `{status, totalResults, articles: [...]}`, or
//! `{status: "error", code, message}` when the provider rejects the call.

use super::types::{non_empty, parse_timestamp, NewsProvider};
use crate::config::ProviderKind;
use crate::error::{FetchError, FetchResult};
use crate::http::RequestConfig;
use crate::types::{Article, FetchedPage, MISSING_DESCRIPTION, UNKNOWN_AUTHOR, UNKNOWN_SOURCE};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    #[serde(default)]
    source: Option<RawSource>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    url_to_image: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    #[serde(default)]
    name: Option<String>,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Self {
            title: raw.title.unwrap_or_default(),
            description: non_empty(raw.description)
                .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
            url: raw.url.unwrap_or_default(),
            image_url: non_empty(raw.url_to_image),
            published_at: parse_timestamp(raw.published_at.as_deref()),
            author: non_empty(raw.author).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            source_name: non_empty(raw.source.and_then(|s| s.name))
                .unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
        }
    }
}

/// NewsAPI `/v2/top-headlines`
#[derive(Debug, Clone)]
pub struct NewsApiProvider {
    country: String,
    category: String,
    page_size: u32,
}

impl NewsApiProvider {
    /// Create a NewsAPI mapping for a fixed country and category
    pub fn new(country: impl Into<String>, category: impl Into<String>, page_size: u32) -> Self {
        Self {
            country: country.into(),
            category: category.into(),
            page_size,
        }
    }
}

impl NewsProvider for NewsApiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::NewsApi
    }

    fn endpoint(&self) -> &str {
        "/v2/top-headlines"
    }

    fn request(&self, page: u32, api_key: &str) -> RequestConfig {
        RequestConfig::new()
            .query("country", &self.country)
            .query("category", &self.category)
            .secret_query("apiKey", api_key)
            .query("page", page)
            .query("pageSize", self.page_size)
    }

    fn decode(&self, body: &Value) -> FetchResult<FetchedPage> {
        if body.get("status").and_then(Value::as_str) == Some("error") {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("API Error");
            return Err(FetchError::provider(message));
        }

        let articles = match body.get("articles") {
            Some(articles @ Value::Array(_)) => articles.clone(),
            _ => return Err(FetchError::malformed("response has no `articles` array")),
        };

        let raw: Vec<RawArticle> = serde_json::from_value(articles)
            .map_err(|e| FetchError::malformed(format!("invalid article entry: {e}")))?;

        let total_results = body
            .get("totalResults")
            .and_then(Value::as_u64)
            .unwrap_or(0);

        Ok(FetchedPage::new(
            raw.into_iter().map(Article::from).collect(),
            total_results,
        ))
    }
}
