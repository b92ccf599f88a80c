//! Provider mapping module
//!
//! Supports: NewsAPI top headlines, Guardian content search
//!
//! # Overview
//!
//! A provider knows two things: how to phrase the request for a page, and how
//! to turn its response body into a [`FetchedPage`](crate::types::FetchedPage).
//! Pagination never looks inside provider payloads.

mod guardian;
mod newsapi;
mod types;

pub use guardian::{GuardianProvider, GUARDIAN_SOURCE};
pub use newsapi::NewsApiProvider;
pub use types::{non_empty, parse_timestamp, strip_html, NewsProvider};

use crate::config::{PagerConfig, ProviderKind};

/// Build the provider mapping selected by `config`
pub fn from_config(config: &PagerConfig) -> Box<dyn NewsProvider> {
    match config.provider {
        ProviderKind::NewsApi => Box::new(NewsApiProvider::new(
            config.country.clone(),
            config.category.clone(),
            config.page_size,
        )),
        ProviderKind::Guardian => Box::new(GuardianProvider::new(
            config.category.clone(),
            config.page_size,
        )),
    }
}
