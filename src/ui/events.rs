//! Background task event processing.

use crate::app::{App, AppEvent};

/// Apply a completed background task to the app state.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::FeedLoaded(result) => {
            // Errors become the visible Errored state; the structured error
            // was already logged where it occurred.
            app.apply_fetch(result);
        }
        AppEvent::RefreshTriggered(result) => {
            // Always restores the control; the acknowledgment is a transient
            // status message, never the persistent error state.
            app.finish_refresh(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FeedState;
    use crate::client::{FeedClient, FeedError};

    fn test_app() -> App {
        let client = FeedClient::new(reqwest::Client::new(), "http://localhost:8000");
        App::new(client, 50)
    }

    #[tokio::test]
    async fn test_feed_loaded_error_becomes_errored_state() {
        let mut app = test_app();
        handle_app_event(&mut app, AppEvent::FeedLoaded(Err(FeedError::HttpStatus(500))));
        assert!(matches!(app.state, FeedState::Errored(_)));
    }

    #[tokio::test]
    async fn test_refresh_error_stays_out_of_feed_state() {
        let mut app = test_app();
        handle_app_event(&mut app, AppEvent::FeedLoaded(Ok(vec![])));
        app.begin_refresh();
        handle_app_event(
            &mut app,
            AppEvent::RefreshTriggered(Err(FeedError::Parse("boom".to_string()))),
        );
        // The feed area keeps its rendered state; only a status message appears
        assert!(matches!(app.state, FeedState::Rendered(_)));
        assert!(app.status_message.is_some());
        assert!(!app.refresh_in_flight);
    }

    #[tokio::test]
    async fn test_refresh_success_sets_acknowledgment() {
        let mut app = test_app();
        app.begin_refresh();
        handle_app_event(&mut app, AppEvent::RefreshTriggered(Ok(())));
        let (msg, _) = app.status_message.as_ref().unwrap();
        assert!(msg.contains("refresh triggered"));
        assert!(!app.refresh_in_flight);
    }
}
