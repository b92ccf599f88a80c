// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # headline-pager
//!
//! Fetch headline articles from a news API, page through them, and render
//! them as cards.
//!
//! ## Features
//!
//! - **Two providers**: NewsAPI top headlines and the Guardian content API,
//!   normalized into one [`Article`] shape
//! - **Explicit state machine**: a pure reducer over [`pagination::PagerState`]
//! - **Swappable fetcher**: the [`fetcher::Fetcher`] trait isolates the network
//! - **Safe navigation**: a page is committed only after it loads; requests
//!   made while a fetch is in flight are rejected
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use headline_pager::{fetcher::HttpFetcher, pagination::PagerController, PagerConfig};
//!
//! #[tokio::main]
//! async fn main() -> headline_pager::Result<()> {
//!     let config = PagerConfig::default().with_env();
//!     let mut pager = PagerController::new(HttpFetcher::from_config(&config)?, config.page_size);
//!
//!     pager.mount().await;
//!     if pager.state().can_go_next() {
//!         pager.next().await;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    PagerController                       │
//! │   mount() / next() / prev()  →  reduce(state, event)     │
//! └───────────────┬──────────────────────────┬───────────────┘
//!                 │                          │
//!        ┌────────┴────────┐        ┌────────┴────────┐
//!        │     Fetcher     │        │     Render      │
//!        │  HttpFetcher    │        │  Card, PageView │
//!        ├─────────────────┤        └─────────────────┘
//!        │ NewsProvider    │
//!        │ NewsAPI│Guardian│
//!        ├─────────────────┤
//!        │   HttpClient    │
//!        └─────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Configuration loading
pub mod config;

/// Single-shot HTTP client
pub mod http;

/// Provider request building and response mapping
pub mod provider;

/// The fetcher seam
pub mod fetcher;

/// Pagination state machine
pub mod pagination;

/// Cards and page views
pub mod render;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{PagerConfig, ProviderKind};
pub use error::{Error, FetchError, Result};
pub use types::{Article, FetchedPage};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
