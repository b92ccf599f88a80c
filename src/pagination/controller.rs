//! Async driver for the reducer
//!
//! Owns a [`Fetcher`] and a [`PagerState`]. Each navigation dispatches the
//! request event, performs the single fetch it implies, then dispatches the
//! completion. Taking `&mut self` keeps one fetch in flight at most.

use super::reducer::{accepts, reduce};
use super::types::{Event, PagerState, RequestStatus};
use crate::fetcher::Fetcher;
use tracing::{info, warn};

/// Outcome of a navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The page was fetched and committed
    Loaded {
        /// Page now shown
        page: u32,
    },
    /// The fetch ran and failed; the page number did not move
    Failed {
        /// Page that failed to load
        page: u32,
        /// Human-readable failure
        message: String,
    },
    /// The request was not permitted in the current state
    Rejected,
}

impl Navigation {
    /// Check if a fetch was attempted
    pub fn was_accepted(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Pagination controller bound to a fetcher
#[derive(Debug)]
pub struct PagerController<F> {
    fetcher: F,
    state: PagerState,
}

impl<F: Fetcher> PagerController<F> {
    /// Create an unmounted controller
    pub fn new(fetcher: F, page_size: u32) -> Self {
        Self {
            fetcher,
            state: PagerState::new(page_size),
        }
    }

    /// Current state
    pub fn state(&self) -> &PagerState {
        &self.state
    }

    /// Underlying fetcher
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Mount and load page 1
    pub async fn mount(&mut self) -> Navigation {
        self.navigate(Event::Mount).await
    }

    /// Advance one page
    pub async fn next(&mut self) -> Navigation {
        self.navigate(Event::Next).await
    }

    /// Go back one page
    pub async fn prev(&mut self) -> Navigation {
        self.navigate(Event::Prev).await
    }

    /// Tear down; the state stops accepting completions
    pub fn unmount(&mut self) {
        self.dispatch(Event::Unmount);
    }

    /// Apply an event directly
    pub fn dispatch(&mut self, event: Event) -> bool {
        let accepted = accepts(&self.state, &event);
        self.state = reduce(std::mem::take(&mut self.state), event);
        accepted
    }

    async fn navigate(&mut self, event: Event) -> Navigation {
        let name = format!("{event:?}");
        if !self.dispatch(event) {
            warn!("{} rejected on page {} ({:?})", name, self.state.page(), self.state.status);
            return Navigation::Rejected;
        }

        let Some(page) = self.state.pending_page else {
            return Navigation::Rejected;
        };

        match self.fetcher.fetch(page).await {
            Ok(fetched) => {
                let count = fetched.articles.len();
                let total = fetched.total_results;
                self.dispatch(Event::Loaded { page, fetched });
                if let RequestStatus::Error(message) = &self.state.status {
                    warn!("Page {} dropped: {}", page, message);
                    return Navigation::Failed {
                        page,
                        message: message.clone(),
                    };
                }
                info!("Showing page {} ({} articles, {} total)", page, count, total);
                Navigation::Loaded { page }
            }
            Err(e) => {
                let message = e.user_message();
                warn!("Fetching page {} failed: {}", page, e);
                self.dispatch(Event::Failed {
                    page,
                    message: message.clone(),
                });
                Navigation::Failed { page, message }
            }
        }
    }
}
