//! Keyboard input handling.

use crate::app::{App, AppEvent};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use super::helpers::{spawn_fetch, spawn_refresh};
use super::Action;

/// Main input dispatch function.
pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(Action::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            return Ok(Action::Quit);
        }

        KeyCode::Char('j') | KeyCode::Down => app.nav_down(),
        KeyCode::Char('k') | KeyCode::Up => app.nav_up(),

        // Reload the feed: re-runs the whole fetch flow from Loading.
        // Distinct from 'r' — triggering a backend refresh never re-fetches.
        KeyCode::Char('g') => spawn_fetch(app, event_tx),

        // Activate the refresh control (no-op while disabled)
        KeyCode::Char('r') => spawn_refresh(app, event_tx),

        // Open the selected card's outbound link in the system browser
        KeyCode::Char('o') | KeyCode::Enter => {
            if let Some(card) = app.selected_card() {
                let url = card.url.clone();
                if let Err(e) = open::that(&url) {
                    tracing::warn!(error = %e, %url, "Failed to open article link");
                    app.set_status("Failed to open link in browser.");
                } else {
                    tracing::debug!(%url, "Opened article link");
                }
            }
        }

        _ => {}
    }

    Ok(Action::Continue)
}
