//! Top-level frame rendering: header, card area, status bar.

use crate::app::{App, FeedState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::cards;
use super::status;

/// Braille spinner frames for the loading indicator.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Render one frame.
pub(super) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header with refresh control
            Constraint::Min(3),    // Card area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    status::render_header(f, app, chunks[0]);
    render_body(f, app, chunks[1]);
    status::render_status(f, app, chunks[2]);
}

/// Render the card area for the current feed state.
fn render_body(f: &mut Frame, app: &App, area: Rect) {
    match &app.state {
        FeedState::Idle | FeedState::Loading => render_loading(f, app, area),
        FeedState::Rendered(_) => cards::render(f, app, area),
        FeedState::Errored(msg) => render_error(f, msg, area),
    }
}

/// Loading indicator shown while the fetch is in flight.
fn render_loading(f: &mut Frame, app: &App, area: Rect) {
    let spinner = SPINNER[app.spinner_frame % SPINNER.len()];
    let paragraph = Paragraph::new(format!("{} Loading news...", spinner))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Latest News"));
    f.render_widget(paragraph, area);
}

/// A single visible error message in place of the card list.
fn render_error(f: &mut Frame, message: &str, area: Rect) {
    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Error"));
    f.render_widget(paragraph, area);
}
