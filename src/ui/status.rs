//! Header and status bar widgets.
//!
//! The header carries the app title and the refresh control; the status bar
//! shows transient acknowledgments (refresh triggered/failed) or key hints.

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::borrow::Cow;

/// Render the one-line header with the refresh control on the right.
pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let control_style = if app.refresh_in_flight {
        // Disabled look while the trigger is in flight
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };
    let control = format!("[r] {}", app.refresh_label());

    let title = " newsdeck";
    let pad = (area.width as usize)
        .saturating_sub(title.len() + control.len() + 1)
        .max(1);

    let line = Line::from(vec![
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(pad)),
        Span::styled(control, control_style),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

/// Render the status bar.
pub fn render_status(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Cow avoids allocation for the static hint line
    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else {
        Cow::Borrowed("[j/k]navigate [o]pen link [g]reload [r]efresh backend [q]uit")
    };

    let style = Style::default().bg(Color::DarkGray).fg(Color::White);
    f.render_widget(Paragraph::new(text).style(style), area);
}
