//! Render module
//!
//! Turns pager state into something a person or a script can read.
//!
//! # Overview
//!
//! This module provides:
//! - [`Card`]: one article with truncation and fallbacks applied
//! - [`PageView`]: cards plus navigation flags for a whole state
//! - Text and JSON-lines renderings of a view

mod card;
mod view;

pub use card::{
    format_published, truncate, Card, CardLimits, ELLIPSIS, PLACEHOLDER_IMAGE, UNKNOWN_DATE,
};
pub use view::{NavView, PageView, HEADING, NO_ARTICLES};

#[cfg(test)]
mod tests;
