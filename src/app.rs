//! Central application state for the feed view.
//!
//! The view is a single linear flow: Idle → Loading → Rendered (possibly
//! empty) or Errored. There is no persistent state machine beyond this enum —
//! every load starts over from Loading, and articles are discarded wholesale
//! on the next fetch.

use crate::client::{FeedClient, FeedError};
use crate::model::{build_cards, Article, ArticleCard};
use std::borrow::Cow;
use tokio::time::Instant;

/// Label shown on the refresh control when idle.
pub const REFRESH_LABEL: &str = "Refresh News";
/// Label shown while a refresh trigger is in flight (control disabled).
pub const REFRESH_BUSY_LABEL: &str = "Refreshing...";

/// What the card area currently displays.
pub enum FeedState {
    /// Initial state, before the first load is spawned.
    Idle,
    /// Fetch in flight; indicator visible, card area cleared.
    Loading,
    /// Fetch succeeded. An empty card list renders the "no articles"
    /// placeholder instead of cards.
    Rendered(Vec<ArticleCard>),
    /// Fetch failed; a single error message replaces the card area.
    Errored(Cow<'static, str>),
}

/// Events sent back from spawned background tasks.
pub enum AppEvent {
    /// The article fetch finished, one way or the other.
    FeedLoaded(Result<Vec<Article>, FeedError>),
    /// The refresh trigger finished, one way or the other.
    RefreshTriggered(Result<(), FeedError>),
}

/// User-facing message for a failed fetch.
///
/// Collapses the structured error into one of three flavors, distinguishing
/// "not configured" from "backend unreachable" from "backend sent garbage".
/// The structured error itself only goes to the diagnostic log.
pub fn fetch_error_message(err: &FeedError) -> Cow<'static, str> {
    match err {
        FeedError::Unconfigured => Cow::Borrowed(
            "API base URL is not configured. Set api_base_url in \
             ~/.config/newsdeck/config.toml or pass --base-url.",
        ),
        FeedError::Transport(_) | FeedError::HttpStatus(_) => {
            Cow::Borrowed("Could not load news. Is the backend running?")
        }
        FeedError::Parse(_) => {
            Cow::Borrowed("Could not load news: the backend sent an unexpected response.")
        }
    }
}

/// Central application state.
pub struct App {
    pub client: FeedClient,
    /// Article cap passed to every fetch.
    pub limit: usize,

    pub state: FeedState,
    /// Selected card index; meaningful only in the Rendered state.
    pub selected: usize,

    /// True while a refresh trigger is in flight. The refresh control is
    /// disabled and relabeled for the duration.
    pub refresh_in_flight: bool,

    /// Transient status message with creation time for expiry.
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    /// Current frame of the loading spinner animation.
    pub spinner_frame: usize,

    /// Dirty flag to skip unnecessary frame renders.
    pub needs_redraw: bool,
}

impl App {
    pub fn new(client: FeedClient, limit: usize) -> Self {
        Self {
            client,
            limit,
            state: FeedState::Idle,
            selected: 0,
            refresh_in_flight: false,
            status_message: None,
            spinner_frame: 0,
            needs_redraw: true,
        }
    }

    /// Cards currently on screen, if any.
    pub fn cards(&self) -> &[ArticleCard] {
        match &self.state {
            FeedState::Rendered(cards) => cards,
            _ => &[],
        }
    }

    /// Currently selected card (bounds-checked).
    pub fn selected_card(&self) -> Option<&ArticleCard> {
        self.cards().get(self.selected)
    }

    /// Enter the Loading state, clearing any previously rendered cards.
    pub fn begin_load(&mut self) {
        self.state = FeedState::Loading;
        self.selected = 0;
        self.spinner_frame = 0;
        self.needs_redraw = true;
    }

    /// Apply a completed fetch. A later completion simply overwrites an
    /// earlier one; no ordering is enforced across overlapping loads.
    pub fn apply_fetch(&mut self, result: Result<Vec<Article>, FeedError>) {
        match result {
            Ok(articles) => {
                tracing::info!(count = articles.len(), "Feed loaded");
                self.state = FeedState::Rendered(build_cards(&articles));
                self.selected = 0;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch news");
                self.state = FeedState::Errored(fetch_error_message(&err));
            }
        }
        self.needs_redraw = true;
    }

    /// Current label for the refresh control.
    pub fn refresh_label(&self) -> &'static str {
        if self.refresh_in_flight {
            REFRESH_BUSY_LABEL
        } else {
            REFRESH_LABEL
        }
    }

    /// Disable the refresh control for an in-flight trigger.
    ///
    /// Returns false when a trigger is already in flight — the control is
    /// disabled and the activation is dropped.
    pub fn begin_refresh(&mut self) -> bool {
        if self.refresh_in_flight {
            return false;
        }
        self.refresh_in_flight = true;
        self.needs_redraw = true;
        true
    }

    /// Re-enable the refresh control and surface the acknowledgment.
    ///
    /// Runs regardless of outcome — the control always comes back. The feed
    /// is NOT re-fetched; the server-side job takes minutes and the user
    /// reloads explicitly when ready.
    pub fn finish_refresh(&mut self, result: Result<(), FeedError>) {
        self.refresh_in_flight = false;
        match result {
            Ok(()) => {
                self.set_status(
                    "News refresh triggered. New articles may take a few minutes; \
                     reload (g) to see them.",
                );
            }
            Err(FeedError::Unconfigured) => {
                self.set_status("Set the API base URL before triggering a refresh.");
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to trigger refresh");
                self.set_status("Failed to trigger refresh.");
            }
        }
        self.needs_redraw = true;
    }

    /// Move selection up one card.
    pub fn nav_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down one card.
    pub fn nav_down(&mut self) {
        let len = self.cards().len();
        if len > 0 {
            self.selected = self.selected.saturating_add(1).min(len - 1);
        }
    }

    /// Set status message (will auto-expire after 5 seconds)
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired (older than 5 seconds).
    /// Returns true if a message was actually cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 5 {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SentimentTone;
    use tokio::time::{self, Duration};

    fn test_app() -> App {
        let client = FeedClient::new(reqwest::Client::new(), "http://localhost:8000");
        App::new(client, 50)
    }

    fn test_article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            source: "S".to_string(),
            published_date: "2024-01-01".to_string(),
            summary: None,
            category: None,
            url: "http://x".to_string(),
            sentiment: None,
        }
    }

    #[tokio::test]
    async fn test_begin_load_clears_cards() {
        let mut app = test_app();
        app.apply_fetch(Ok(vec![test_article("A")]));
        assert_eq!(app.cards().len(), 1);

        app.begin_load();
        assert!(matches!(app.state, FeedState::Loading));
        assert!(app.cards().is_empty());
    }

    #[tokio::test]
    async fn test_successful_fetch_renders_in_order() {
        let mut app = test_app();
        app.apply_fetch(Ok(vec![test_article("First"), test_article("Second")]));
        let cards = app.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "First");
        assert_eq!(cards[1].title, "Second");
    }

    #[tokio::test]
    async fn test_empty_fetch_renders_empty() {
        let mut app = test_app();
        app.apply_fetch(Ok(vec![]));
        assert!(matches!(&app.state, FeedState::Rendered(c) if c.is_empty()));
    }

    #[tokio::test]
    async fn test_http_500_transitions_to_errored() {
        let mut app = test_app();
        app.begin_load();
        app.apply_fetch(Err(FeedError::HttpStatus(500)));
        let FeedState::Errored(msg) = &app.state else {
            panic!("expected Errored state");
        };
        assert!(msg.contains("Is the backend running?"));
    }

    #[tokio::test]
    async fn test_unconfigured_error_names_the_config() {
        let mut app = test_app();
        app.apply_fetch(Err(FeedError::Unconfigured));
        let FeedState::Errored(msg) = &app.state else {
            panic!("expected Errored state");
        };
        assert!(msg.contains("not configured"));
    }

    #[tokio::test]
    async fn test_parse_error_gets_distinct_message() {
        let mut app = test_app();
        app.apply_fetch(Err(FeedError::Parse("expected array".to_string())));
        let FeedState::Errored(msg) = &app.state else {
            panic!("expected Errored state");
        };
        assert!(msg.contains("unexpected response"));
    }

    #[tokio::test]
    async fn test_refresh_control_disables_and_restores() {
        let mut app = test_app();
        assert_eq!(app.refresh_label(), REFRESH_LABEL);

        assert!(app.begin_refresh());
        assert_eq!(app.refresh_label(), REFRESH_BUSY_LABEL);
        // Control is disabled while in flight
        assert!(!app.begin_refresh());

        // Label restores regardless of outcome
        app.finish_refresh(Err(FeedError::Parse("x".to_string())));
        assert_eq!(app.refresh_label(), REFRESH_LABEL);
        assert!(app.status_message.is_some());
    }

    #[tokio::test]
    async fn test_refresh_success_does_not_touch_feed_state() {
        let mut app = test_app();
        app.apply_fetch(Ok(vec![test_article("A")]));
        app.begin_refresh();
        app.finish_refresh(Ok(()));
        // No automatic re-fetch: the rendered list is untouched
        assert_eq!(app.cards().len(), 1);
        let (msg, _) = app.status_message.as_ref().unwrap();
        assert!(msg.contains("refresh triggered"));
    }

    #[tokio::test]
    async fn test_nav_clamps_to_card_range() {
        let mut app = test_app();
        app.apply_fetch(Ok(vec![test_article("A"), test_article("B")]));

        app.nav_up();
        assert_eq!(app.selected, 0); // saturates at 0

        app.nav_down();
        app.nav_down();
        app.nav_down();
        assert_eq!(app.selected, 1); // clamps at len - 1
    }

    #[tokio::test]
    async fn test_nav_down_on_empty_list_is_noop() {
        let mut app = test_app();
        app.nav_down();
        assert_eq!(app.selected, 0);
    }

    #[tokio::test]
    async fn test_status_expires_after_5_seconds() {
        let mut app = test_app();
        time::pause();
        app.set_status("Test message");
        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(3)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_some()); // Still present at 3s

        time::advance(Duration::from_secs(3)).await;
        assert!(app.clear_expired_status());
        assert!(app.status_message.is_none()); // Expired after 5s
    }

    #[tokio::test]
    async fn test_fallbacks_survive_into_cards() {
        let mut app = test_app();
        app.apply_fetch(Ok(vec![test_article("A")]));
        let card = app.selected_card().unwrap();
        assert_eq!(card.body, "No summary available.");
        assert_eq!(card.category, "General");
        assert_eq!(card.sentiment_text, "N/A (N/A)");
        assert_eq!(card.tone, SentimentTone::Other);
    }
}
