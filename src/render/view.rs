//! Page view and its text/JSON renderings

use super::card::{Card, CardLimits};
use crate::error::Result;
use crate::pagination::{can_go_next, can_go_prev, PagerState, RequestStatus};
use serde::Serialize;
use std::fmt::Write as _;

/// Heading printed above the cards
pub const HEADING: &str = "HEADLINES";

/// Shown when a successful page has no articles
pub const NO_ARTICLES: &str = "No articles found.";

/// Navigation controls and whether each is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavView {
    pub can_go_prev: bool,
    pub can_go_next: bool,
    pub page: u32,
    pub total_pages: u64,
}

/// Everything needed to draw one state of the pager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    #[serde(flatten)]
    pub status: RequestStatus,
    pub page: u32,
    pub page_size: u32,
    pub total_results: u64,
    pub cards: Vec<Card>,
    /// Absent on error, while loading, and when there is nothing to page
    pub navigation: Option<NavView>,
}

impl PageView {
    /// Build the view for `state`
    pub fn from_state(state: &PagerState, limits: CardLimits) -> Self {
        let pagination = state.pagination;
        let showing_cards = !state.status.is_loading() && !state.status.is_error();

        let cards: Vec<Card> = if showing_cards {
            state
                .articles
                .iter()
                .map(|a| Card::from_article(a, limits))
                .collect()
        } else {
            Vec::new()
        };

        let navigation = (showing_cards && !cards.is_empty()).then(|| NavView {
            can_go_prev: can_go_prev(pagination.page),
            can_go_next: can_go_next(
                pagination.page,
                pagination.total_results,
                pagination.page_size,
            ),
            page: pagination.page,
            total_pages: pagination.total_pages(),
        });

        Self {
            status: state.status.clone(),
            page: pagination.page,
            page_size: pagination.page_size,
            total_results: pagination.total_results,
            cards,
            navigation,
        }
    }

    /// Single-line JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Human-readable text
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{HEADING}");
        let _ = writeln!(out, "{}", "=".repeat(HEADING.len()));

        match &self.status {
            RequestStatus::Idle => {}
            RequestStatus::Loading => {
                let _ = writeln!(out, "Loading...");
            }
            RequestStatus::Error(message) => {
                let _ = writeln!(out, "Error: {message}");
                let _ = writeln!(out, "Steps to fix:");
                let _ = writeln!(out, "  - Get an API key from your news provider");
                let _ = writeln!(out, "  - Set api_key in the config file or export NEWS_API_KEY");
                let _ = writeln!(out, "  - Run the command again");
            }
            RequestStatus::Success if self.cards.is_empty() => {
                let _ = writeln!(out, "{NO_ARTICLES}");
            }
            RequestStatus::Success => {
                for (i, card) in self.cards.iter().enumerate() {
                    write_card(&mut out, i + 1, card);
                }
            }
        }

        if let Some(nav) = &self.navigation {
            let prev = if nav.can_go_prev { "[p] Previous" } else { "   Previous" };
            let next = if nav.can_go_next { "[n] Next" } else { "   Next" };
            let _ = writeln!(
                out,
                "\n{prev}    page {} of {}    {next}",
                nav.page, nav.total_pages
            );
        }

        out
    }
}

fn write_card(out: &mut String, index: usize, card: &Card) {
    let _ = writeln!(out, "\n{index}. {}  [{}]", card.title, card.source);
    let _ = writeln!(out, "   {}", card.description);
    let _ = writeln!(out, "   {} | {}", card.byline, card.published);
    let _ = writeln!(out, "   Image: {}", card.image_url);
    let _ = writeln!(out, "   Read more: {}", card.link);
}
