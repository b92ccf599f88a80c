//! Article cards
//!
//! Presentation rules applied to one article: truncation, image and date
//! fallbacks.

use crate::config::PagerConfig;
use crate::types::Article;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Image shown for articles that have none
pub const PLACEHOLDER_IMAGE: &str =
    "https://s.hdnux.com/photos/01/53/54/33/28231397/7/rawImage.jpg";

/// Marker appended to truncated text
pub const ELLIPSIS: &str = "...";

/// Date shown when the article has no timestamp
pub const UNKNOWN_DATE: &str = "Unknown date";

/// Truncation limits, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLimits {
    /// Maximum title length before the ellipsis
    pub title: usize,
    /// Maximum description length before the ellipsis
    pub description: usize,
}

impl Default for CardLimits {
    fn default() -> Self {
        Self {
            title: 70,
            description: 100,
        }
    }
}

impl From<&PagerConfig> for CardLimits {
    fn from(config: &PagerConfig) -> Self {
        Self {
            title: config.title_limit,
            description: config.description_limit,
        }
    }
}

/// An article ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link: String,
    pub byline: String,
    pub published: String,
    pub source: String,
}

impl Card {
    /// Apply presentation rules to `article`
    pub fn from_article(article: &Article, limits: CardLimits) -> Self {
        Self {
            title: truncate(&article.title, limits.title),
            description: truncate(&article.description, limits.description),
            image_url: article
                .image_url
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            link: article.url.clone(),
            byline: format!("By {}", article.author),
            published: format_published(article.published_at),
            source: article.source_name.clone(),
        }
    }
}

/// Cut `text` to `limit` characters, appending [`ELLIPSIS`] only if cut
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}{ELLIPSIS}", &text[..idx]),
        None => text.to_string(),
    }
}

/// GMT date string, or [`UNKNOWN_DATE`]
pub fn format_published(published_at: Option<DateTime<Utc>>) -> String {
    published_at.map_or_else(
        || UNKNOWN_DATE.to_string(),
        |dt| dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
    )
}
