//! Guardian content API mapping
//!
//! Response shape: `{response: {status, total, results: [...]}}`. Errors come
//! back as `{response: {status: "error", message}}`.

use super::types::{non_empty, parse_timestamp, strip_html, NewsProvider};
use crate::config::ProviderKind;
use crate::error::{FetchError, FetchResult};
use crate::http::RequestConfig;
use crate::types::{Article, FetchedPage, MISSING_DESCRIPTION, UNKNOWN_AUTHOR};
use serde::Deserialize;
use serde_json::Value;

/// Source name attached to every Guardian article
pub const GUARDIAN_SOURCE: &str = "The Guardian";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResult {
    #[serde(default)]
    web_title: Option<String>,
    #[serde(default)]
    web_url: Option<String>,
    #[serde(default)]
    web_publication_date: Option<String>,
    #[serde(default)]
    fields: Option<RawFields>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFields {
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    trail_text: Option<String>,
    #[serde(default)]
    byline: Option<String>,
}

impl From<RawResult> for Article {
    fn from(raw: RawResult) -> Self {
        let fields = raw.fields.unwrap_or_default();
        Self {
            title: raw.web_title.unwrap_or_default(),
            description: non_empty(fields.trail_text.as_deref().map(strip_html))
                .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
            url: raw.web_url.unwrap_or_default(),
            image_url: non_empty(fields.thumbnail),
            published_at: parse_timestamp(raw.web_publication_date.as_deref()),
            author: non_empty(fields.byline).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            source_name: GUARDIAN_SOURCE.to_string(),
        }
    }
}

/// Guardian `/search`, filtered to one section
#[derive(Debug, Clone)]
pub struct GuardianProvider {
    section: String,
    page_size: u32,
}

impl GuardianProvider {
    /// Create a Guardian mapping for a fixed section
    pub fn new(section: impl Into<String>, page_size: u32) -> Self {
        Self {
            section: section.into(),
            page_size,
        }
    }
}

impl NewsProvider for GuardianProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Guardian
    }

    fn endpoint(&self) -> &str {
        "/search"
    }

    fn request(&self, page: u32, api_key: &str) -> RequestConfig {
        RequestConfig::new()
            .query("section", &self.section)
            .secret_query("api-key", api_key)
            .query("page", page)
            .query("page-size", self.page_size)
            .query("show-fields", "thumbnail,trailText,byline")
    }

    fn decode(&self, body: &Value) -> FetchResult<FetchedPage> {
        let Some(response) = body.get("response") else {
            return Err(FetchError::malformed("response has no `response` object"));
        };

        if response.get("status").and_then(Value::as_str) == Some("error") {
            let message = response
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("API Error");
            return Err(FetchError::provider(message));
        }

        let results = match response.get("results") {
            Some(results @ Value::Array(_)) => results.clone(),
            _ => return Err(FetchError::malformed("response has no `results` array")),
        };

        let raw: Vec<RawResult> = serde_json::from_value(results)
            .map_err(|e| FetchError::malformed(format!("invalid result entry: {e}")))?;

        let total_results = response.get("total").and_then(Value::as_u64).unwrap_or(0);

        Ok(FetchedPage::new(
            raw.into_iter().map(Article::from).collect(),
            total_results,
        ))
    }
}
