//! Tests for render module

use super::*;
use crate::config::PagerConfig;
use crate::pagination::{PagerState, RequestStatus};
use crate::types::Article;
use chrono::{TimeZone, Utc};
use test_case::test_case;

fn article() -> Article {
    Article {
        title: "Short title".to_string(),
        description: "Short description".to_string(),
        url: "https://example.com/story".to_string(),
        image_url: Some("https://example.com/story.jpg".to_string()),
        published_at: Some(Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap()),
        author: "Jane Doe".to_string(),
        source_name: "Reuters".to_string(),
    }
}

fn state_with(status: RequestStatus, articles: Vec<Article>, page: u32, total: u64) -> PagerState {
    let mut state = PagerState::new(8);
    state.mounted = true;
    state.status = status;
    state.articles = articles;
    state.pagination.page = page;
    state.pagination.total_results = total;
    state
}

// ============================================================================
// Cards
// ============================================================================

#[test_case("hello", 10 => "hello" ; "shorter than limit")]
#[test_case("hello", 5 => "hello" ; "exactly at limit")]
#[test_case("hello world", 5 => "hello..." ; "longer than limit")]
#[test_case("", 5 => "" ; "empty")]
#[test_case("héllo wörld", 4 => "héll..." ; "multibyte characters")]
fn test_truncate(text: &str, limit: usize) -> String {
    truncate(text, limit)
}

#[test]
fn test_card_from_full_article() {
    let card = Card::from_article(&article(), CardLimits::default());
    pretty_assertions::assert_eq!(
        card,
        Card {
            title: "Short title".to_string(),
            description: "Short description".to_string(),
            image_url: "https://example.com/story.jpg".to_string(),
            link: "https://example.com/story".to_string(),
            byline: "By Jane Doe".to_string(),
            published: "Tue, 05 Mar 2024 14:30:00 GMT".to_string(),
            source: "Reuters".to_string(),
        }
    );
}

#[test]
fn test_card_missing_image_uses_placeholder() {
    let mut a = article();
    a.image_url = None;
    let card = Card::from_article(&a, CardLimits::default());
    pretty_assertions::assert_eq!(card.image_url, PLACEHOLDER_IMAGE);
}

#[test]
fn test_card_long_description_is_truncated() {
    let mut a = article();
    a.description = "x".repeat(150);
    a.title = "t".repeat(80);
    let card = Card::from_article(&a, CardLimits::default());

    pretty_assertions::assert_eq!(card.description, format!("{}{ELLIPSIS}", "x".repeat(100)));
    pretty_assertions::assert_eq!(card.title, format!("{}{ELLIPSIS}", "t".repeat(70)));
}

#[test]
fn test_card_limits_from_config() {
    let config = PagerConfig {
        title_limit: 10,
        description_limit: 20,
        ..Default::default()
    };
    pretty_assertions::assert_eq!(
        CardLimits::from(&config),
        CardLimits {
            title: 10,
            description: 20
        }
    );
}

#[test]
fn test_missing_date() {
    pretty_assertions::assert_eq!(format_published(None), UNKNOWN_DATE);
}

// ============================================================================
// Page view
// ============================================================================

#[test]
fn test_view_first_of_three_pages() {
    let state = state_with(RequestStatus::Success, vec![article()], 1, 20);
    let view = PageView::from_state(&state, CardLimits::default());

    pretty_assertions::assert_eq!(view.cards.len(), 1);
    pretty_assertions::assert_eq!(
        view.navigation,
        Some(NavView {
            can_go_prev: false,
            can_go_next: true,
            page: 1,
            total_pages: 3,
        })
    );
}

#[test]
fn test_view_last_page_disables_next() {
    let state = state_with(RequestStatus::Success, vec![article()], 3, 20);
    let nav = PageView::from_state(&state, CardLimits::default())
        .navigation
        .unwrap();
    assert!(nav.can_go_prev);
    assert!(!nav.can_go_next);
}

#[test]
fn test_view_error_hides_navigation() {
    let state = state_with(
        RequestStatus::Error("Invalid API Key.".to_string()),
        vec![],
        1,
        0,
    );
    let view = PageView::from_state(&state, CardLimits::default());

    assert!(view.cards.is_empty());
    assert!(view.navigation.is_none());

    let text = view.to_text();
    assert!(text.contains("Error: Invalid API Key."));
    assert!(text.contains("Steps to fix:"));
    assert!(!text.contains("Next"));
}

#[test]
fn test_view_empty_page_hides_navigation() {
    let state = state_with(RequestStatus::Success, vec![], 1, 0);
    let view = PageView::from_state(&state, CardLimits::default());

    assert!(view.navigation.is_none());
    assert!(view.to_text().contains(NO_ARTICLES));
}

#[test]
fn test_view_loading_shows_no_cards() {
    let state = state_with(RequestStatus::Loading, vec![article()], 1, 20);
    let view = PageView::from_state(&state, CardLimits::default());

    assert!(view.cards.is_empty());
    assert!(view.navigation.is_none());
    assert!(view.to_text().contains("Loading..."));
}

#[test]
fn test_view_text_lists_cards_and_controls() {
    let state = state_with(RequestStatus::Success, vec![article()], 2, 20);
    let text = PageView::from_state(&state, CardLimits::default()).to_text();

    assert!(text.starts_with(HEADING));
    assert!(text.contains("1. Short title  [Reuters]"));
    assert!(text.contains("By Jane Doe | Tue, 05 Mar 2024 14:30:00 GMT"));
    assert!(text.contains("[p] Previous"));
    assert!(text.contains("page 2 of 3"));
    assert!(text.contains("[n] Next"));
}

#[test]
fn test_view_json() {
    let state = state_with(RequestStatus::Success, vec![article()], 1, 20);
    let json: serde_json::Value = serde_json::from_str(
        &PageView::from_state(&state, CardLimits::default())
            .to_json()
            .unwrap(),
    )
    .unwrap();

    pretty_assertions::assert_eq!(json["status"], "success");
    pretty_assertions::assert_eq!(json["page"], 1);
    pretty_assertions::assert_eq!(json["total_results"], 20);
    pretty_assertions::assert_eq!(json["navigation"]["can_go_next"], true);
    pretty_assertions::assert_eq!(json["navigation"]["can_go_prev"], false);
    pretty_assertions::assert_eq!(json["cards"][0]["source"], "Reuters");
}

#[test]
fn test_view_json_error_message() {
    let state = state_with(RequestStatus::Error("boom".to_string()), vec![], 1, 0);
    let json: serde_json::Value = serde_json::from_str(
        &PageView::from_state(&state, CardLimits::default())
            .to_json()
            .unwrap(),
    )
    .unwrap();

    pretty_assertions::assert_eq!(json["status"], "error");
    pretty_assertions::assert_eq!(json["message"], "boom");
    assert!(json["navigation"].is_null());
}
