//! Provider trait and shared mapping helpers

use crate::config::ProviderKind;
use crate::error::FetchResult;
use crate::http::RequestConfig;
use crate::types::FetchedPage;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Core trait for provider-specific request building and response mapping
pub trait NewsProvider: Send + Sync {
    /// Which provider this is
    fn kind(&self) -> ProviderKind;

    /// Path of the endpoint, relative to the base URL
    fn endpoint(&self) -> &str;

    /// Query parameters for `page`, credential included
    fn request(&self, page: u32, api_key: &str) -> RequestConfig;

    /// Map a decoded response body into normalized articles
    fn decode(&self, body: &Value) -> FetchResult<FetchedPage>;
}

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static SPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Strip markup tags and collapse whitespace
pub fn strip_html(text: &str) -> String {
    let without_tags = TAG_REGEX.replace_all(text, "");
    let decoded = without_tags
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    SPACE_REGEX.replace_all(decoded.trim(), " ").into_owned()
}

/// Parse an RFC 3339 timestamp, `None` when absent or invalid
pub fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Treat empty and whitespace-only strings as missing
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
