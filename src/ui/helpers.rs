//! Shared helpers for spawning background work from UI handlers.

use crate::app::{App, AppEvent};
use tokio::sync::mpsc;

/// Spawn the article fetch as a background task.
///
/// Moves the view into Loading immediately; the result arrives later as
/// [`AppEvent::FeedLoaded`]. In-flight fetches are neither deduplicated nor
/// aborted — the latest completion simply wins.
pub(super) fn spawn_fetch(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    app.begin_load();

    let client = app.client.clone();
    let limit = app.limit;
    let tx = event_tx.clone();

    tokio::spawn(async move {
        let result = client.fetch_articles(limit).await;
        if let Err(e) = tx.send(AppEvent::FeedLoaded(result)).await {
            tracing::warn!(error = %e, "Failed to send fetch result (receiver dropped)");
        }
    });
}

/// Spawn the refresh trigger as a background task.
///
/// Does nothing when a trigger is already in flight — the control is
/// disabled for the duration. The completion arrives as
/// [`AppEvent::RefreshTriggered`] and re-enables the control either way.
pub(super) fn spawn_refresh(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    if !app.begin_refresh() {
        tracing::debug!("Refresh control is disabled, ignoring activation");
        return;
    }

    let client = app.client.clone();
    let tx = event_tx.clone();

    tokio::spawn(async move {
        let result = client.trigger_refresh().await;
        if let Err(e) = tx.send(AppEvent::RefreshTriggered(result)).await {
            tracing::warn!(error = %e, "Failed to send refresh result (receiver dropped)");
        }
    });
}
