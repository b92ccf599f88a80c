//! Pure pagination reducer
//!
//! `reduce(state, event) -> state` with no I/O. Rejected events return the
//! state untouched; [`accepts`] lets a driver tell the two apart up front.

use super::types::{Event, PagerState, RequestStatus};
use crate::types::{page_count, FetchedPage};

/// Whether `event` would change `state`
pub fn accepts(state: &PagerState, event: &Event) -> bool {
    match event {
        Event::Mount => !state.mounted,
        Event::Next => state.can_go_next(),
        Event::Prev => state.can_go_prev(),
        Event::Loaded { page, .. } | Event::Failed { page, .. } => {
            state.mounted && state.status.is_loading() && state.pending_page == Some(*page)
        }
        Event::Unmount => state.mounted,
    }
}

/// Apply one event
///
/// A `Loaded` for a page past the end of its own `total_results` is
/// committed as a failure, so `page` never exceeds the page count.
pub fn reduce(state: PagerState, event: Event) -> PagerState {
    if !accepts(&state, &event) {
        return state;
    }

    match event {
        Event::Mount => {
            let mut fresh = PagerState::new(state.pagination.page_size);
            fresh.mounted = true;
            fresh.status = RequestStatus::Loading;
            fresh.pending_page = Some(1);
            fresh
        }
        Event::Next => {
            let page = state.page() + 1;
            start_loading(state, page)
        }
        Event::Prev => {
            let page = state.page() - 1;
            start_loading(state, page)
        }
        Event::Loaded { page, fetched } if past_last_page(&state, page, &fetched) => {
            fail(state, format!("Page {page} is past the last page"))
        }
        Event::Loaded { page, fetched } => {
            let mut state = state;
            state.pagination.page = page;
            state.pagination.total_results = fetched.total_results;
            state.articles = fetched.articles;
            state.status = RequestStatus::Success;
            state.pending_page = None;
            state
        }
        Event::Failed { message, .. } => fail(state, message),
        Event::Unmount => {
            let mut state = state;
            state.mounted = false;
            state.pending_page = None;
            if state.status.is_loading() {
                state.status = RequestStatus::Idle;
            }
            state
        }
    }
}

fn past_last_page(state: &PagerState, page: u32, fetched: &FetchedPage) -> bool {
    page > 1 && u64::from(page) > page_count(fetched.total_results, state.pagination.page_size)
}

// page and total_results keep their last good values
fn fail(mut state: PagerState, message: String) -> PagerState {
    state.articles.clear();
    state.status = RequestStatus::Error(message);
    state.pending_page = None;
    state
}

fn start_loading(mut state: PagerState, page: u32) -> PagerState {
    state.status = RequestStatus::Loading;
    state.pending_page = Some(page);
    state
}
