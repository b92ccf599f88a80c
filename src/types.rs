//! Common types used throughout headline-pager
//!
//! The normalized article shape and the page a fetch produces. Both are
//! provider-agnostic; provider mapping lives in [`crate::provider`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author shown when the provider does not name one
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Source name shown when the provider omits it
pub const UNKNOWN_SOURCE: &str = "Unknown source";

/// Description used when the provider sends none
pub const MISSING_DESCRIPTION: &str = "No description available.";

// ============================================================================
// Article
// ============================================================================

/// A provider-agnostic article, as consumed by rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline
    pub title: String,
    /// Summary text (placeholder when absent upstream)
    pub description: String,
    /// Link to the full story
    pub url: String,
    /// Lead image, if any
    pub image_url: Option<String>,
    /// Publication time, if present and parseable
    pub published_at: Option<DateTime<Utc>>,
    /// Byline, `"Unknown"` when absent
    pub author: String,
    /// Publishing outlet
    pub source_name: String,
}

// ============================================================================
// Fetched Page
// ============================================================================

/// One page of normalized results plus the provider's total count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedPage {
    /// Articles on this page
    pub articles: Vec<Article>,
    /// Total matching articles across all pages
    pub total_results: u64,
}

impl FetchedPage {
    /// Create a page
    pub fn new(articles: Vec<Article>, total_results: u64) -> Self {
        Self {
            articles,
            total_results,
        }
    }
}

/// Number of pages needed for `total_results` at `page_size` per page
pub fn page_count(total_results: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_results.div_ceil(u64::from(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 8 => 0 ; "no results")]
    #[test_case(20, 8 => 3 ; "partial last page")]
    #[test_case(16, 8 => 2 ; "exact multiple")]
    #[test_case(1, 9 => 1 ; "single result")]
    #[test_case(5, 0 => 0 ; "zero page size")]
    fn test_page_count(total: u64, page_size: u32) -> u64 {
        page_count(total, page_size)
    }

    #[test]
    fn test_article_serializes_snake_case() {
        let article = Article {
            title: "t".to_string(),
            description: MISSING_DESCRIPTION.to_string(),
            url: "https://example.com/a".to_string(),
            image_url: None,
            published_at: None,
            author: UNKNOWN_AUTHOR.to_string(),
            source_name: UNKNOWN_SOURCE.to_string(),
        };
        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["source_name"], "Unknown source");
        assert!(json["image_url"].is_null());
    }
}
