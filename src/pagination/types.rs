//! Pagination types
//!
//! Defines the state the reducer folds over and the events that drive it.

use crate::config::DEFAULT_PAGE_SIZE;
use crate::types::{page_count, Article, FetchedPage};
use serde::Serialize;

/// Whether `page + 1` is still within the known result set
pub fn can_go_next(page: u32, total_results: u64, page_size: u32) -> bool {
    // page + 1 <= ceil(total / size)
    u64::from(page) < page_count(total_results, page_size)
}

/// Whether there is a page before `page`
pub fn can_go_prev(page: u32) -> bool {
    page > 1
}

// ============================================================================
// Pagination State
// ============================================================================

/// Page position and the counters it is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    /// Current 1-based page
    pub page: u32,
    /// Articles per page, fixed at mount
    pub page_size: u32,
    /// Last total reported by the provider
    pub total_results: u64,
}

impl PaginationState {
    /// Create state positioned on page 1 with no known results
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            total_results: 0,
        }
    }

    /// Number of pages the last total spans
    pub fn total_pages(&self) -> u64 {
        page_count(self.total_results, self.page_size)
    }

    /// Whether advancing is permitted by the counters
    pub fn can_go_next(&self) -> bool {
        can_go_next(self.page, self.total_results, self.page_size)
    }

    /// Whether retreating is permitted by the counters
    pub fn can_go_prev(&self) -> bool {
        can_go_prev(self.page)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

// ============================================================================
// Request Status
// ============================================================================

/// Lifecycle of the most recent fetch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum RequestStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last fetch succeeded
    Success,
    /// The last fetch failed with this message
    Error(String),
}

impl RequestStatus {
    /// Check if a fetch is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if the last fetch failed
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Check if a fetch has completed, successfully or not
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Success | Self::Error(_))
    }
}

// ============================================================================
// Pager State
// ============================================================================

/// Everything the pager knows between events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagerState {
    /// Page position and counters
    pub pagination: PaginationState,
    /// Fetch lifecycle
    pub status: RequestStatus,
    /// Articles on the committed page (empty after a failure)
    pub articles: Vec<Article>,
    /// Page requested by the in-flight fetch
    pub pending_page: Option<u32>,
    /// False before mount and after unmount
    pub mounted: bool,
}

impl PagerState {
    /// Create unmounted state for a given page size
    pub fn new(page_size: u32) -> Self {
        Self {
            pagination: PaginationState::new(page_size),
            ..Default::default()
        }
    }

    /// Current page
    pub fn page(&self) -> u32 {
        self.pagination.page
    }

    /// "Previous" is usable right now
    pub fn can_go_prev(&self) -> bool {
        self.mounted && !self.status.is_loading() && self.pagination.can_go_prev()
    }

    /// "Next" is usable right now
    pub fn can_go_next(&self) -> bool {
        self.mounted && self.status.is_settled() && self.pagination.can_go_next()
    }
}

// ============================================================================
// Events
// ============================================================================

/// Inputs to the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Start up and request page 1
    Mount,
    /// Request the following page
    Next,
    /// Request the preceding page
    Prev,
    /// The fetch for `page` succeeded
    Loaded {
        /// Page that was requested
        page: u32,
        /// Normalized results
        fetched: FetchedPage,
    },
    /// The fetch for `page` failed
    Failed {
        /// Page that was requested
        page: u32,
        /// Human-readable failure
        message: String,
    },
    /// Tear down; later completions are dropped
    Unmount,
}
