//! Pagination module
//!
//! Supports: mount, next, prev, unmount
//!
//! # Overview
//!
//! Page position lives in an explicit [`PagerState`] value advanced by the
//! pure [`reduce`] function. [`PagerController`] is the only place that
//! talks to a [`Fetcher`](crate::fetcher::Fetcher): it commits a page only
//! after its fetch succeeds, and rejects navigation while a fetch is in
//! flight.

mod controller;
mod reducer;
mod types;

pub use controller::{Navigation, PagerController};
pub use reducer::{accepts, reduce};
pub use types::{can_go_next, can_go_prev, Event, PagerState, PaginationState, RequestStatus};
