//! Card list widget: one visual card per article.
//!
//! Each card shows the title, a "source - date" subtitle, the summary (or
//! its fallback), a category badge, a color-coded sentiment badge, and the
//! outbound URL. Card text is resolved upstream in [`crate::model`]; this
//! module only lays it out.

use crate::app::App;
use crate::model::{ArticleCard, SentimentTone};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shown when a successful fetch returns zero articles.
pub const EMPTY_PLACEHOLDER: &str = "No news articles found. Try refreshing later.";

/// Build the display lines for a single card at the given inner width.
///
/// Pure with respect to the terminal — exercised directly by tests.
pub fn card_lines(card: &ArticleCard, width: usize) -> Vec<Line<'static>> {
    let width = width.max(10);
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        truncate(&card.title, width),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        truncate(&card.subtitle, width),
        Style::default().fg(Color::DarkGray),
    )));

    for body_line in wrap_text(&card.body, width) {
        lines.push(Line::from(body_line));
    }

    let sentiment_color = match card.tone {
        SentimentTone::Positive => Color::Green,
        SentimentTone::Other => Color::Red,
    };
    lines.push(Line::from(vec![
        Span::styled(
            format!(" {} ", card.category),
            Style::default().bg(Color::Blue).fg(Color::White),
        ),
        Span::raw(" "),
        Span::styled(
            format!(" {} ", card.sentiment_text),
            Style::default().bg(sentiment_color).fg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(
            truncate(&card.url, width.saturating_sub(4)),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]));
    // Blank separator between cards
    lines.push(Line::from(""));

    lines
}

/// Render the card area for the current feed state.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    // Guard against degenerate areas after aggressive terminal resizing
    if area.width < 2 || area.height < 2 {
        return;
    }

    let cards = app.cards();
    let inner_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = if cards.is_empty() {
        vec![ListItem::new(EMPTY_PLACEHOLDER)]
    } else {
        cards
            .iter()
            .map(|card| ListItem::new(card_lines(card, inner_width)))
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Latest News"),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    if !cards.is_empty() {
        state.select(Some(app.selected.min(cards.len() - 1)));
    }

    f.render_stateful_widget(list, area, &mut state);
}

/// Truncate a string to `max` display columns, appending "..." when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let budget = max.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// Greedy word wrap to `width` display columns.
///
/// Words longer than the width land on their own line untruncated; ratatui
/// clips them at the border rather than panicking.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Article, ArticleCard, Sentiment};

    fn card(sentiment: Option<Sentiment>) -> ArticleCard {
        ArticleCard::from_article(&Article {
            title: "A headline".to_string(),
            source: "Wire".to_string(),
            published_date: "2024-01-01".to_string(),
            summary: None,
            category: None,
            url: "http://example.com".to_string(),
            sentiment,
        })
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_card_lines_include_all_fields() {
        let lines = card_lines(&card(None), 80);
        let text: Vec<String> = lines.iter().map(line_text).collect();
        assert!(text[0].contains("A headline"));
        assert!(text[1].starts_with("Wire - "));
        assert!(text.iter().any(|l| l.contains("No summary available.")));
        assert!(text.iter().any(|l| l.contains("General")));
        assert!(text.iter().any(|l| l.contains("N/A (N/A)")));
        assert!(text.iter().any(|l| l.contains("http://example.com")));
    }

    #[test]
    fn test_positive_sentiment_badge_is_green() {
        let lines = card_lines(
            &card(Some(Sentiment {
                score: 0.9,
                label: "POSITIVE".to_string(),
            })),
            80,
        );
        let badge_line = &lines[lines.len() - 2];
        let badge = badge_line
            .spans
            .iter()
            .find(|s| s.content.contains("POSITIVE"))
            .unwrap();
        assert_eq!(badge.style.bg, Some(Color::Green));
    }

    #[test]
    fn test_missing_sentiment_badge_uses_non_positive_color() {
        let lines = card_lines(&card(None), 80);
        let badge_line = &lines[lines.len() - 2];
        let badge = badge_line
            .spans
            .iter()
            .find(|s| s.content.contains("N/A"))
            .unwrap();
        assert_eq!(badge.style.bg, Some(Color::Red));
    }

    #[test]
    fn test_negative_sentiment_badge_is_red() {
        let lines = card_lines(
            &card(Some(Sentiment {
                score: 0.7,
                label: "NEGATIVE".to_string(),
            })),
            80,
        );
        let badge_line = &lines[lines.len() - 2];
        let badge = badge_line
            .spans
            .iter()
            .find(|s| s.content.contains("NEGATIVE"))
            .unwrap();
        assert_eq!(badge.style.bg, Some(Color::Red));
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let wrapped = wrap_text("one two three four five six seven", 10);
        assert!(wrapped.len() > 1);
        for line in &wrapped {
            assert!(line.width() <= 10, "line too wide: {:?}", line);
        }
    }

    #[test]
    fn test_wrap_text_empty_input() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_wrap_text_long_word_kept_whole() {
        let wrapped = wrap_text("supercalifragilistic", 5);
        assert_eq!(wrapped, vec!["supercalifragilistic".to_string()]);
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("short", 20), "short");
    }

    #[test]
    fn test_truncate_long_string_adds_ellipsis() {
        let out = truncate("a very long headline that will not fit", 15);
        assert!(out.ends_with("..."));
        assert!(out.width() <= 15);
    }

    #[test]
    fn test_truncate_multibyte_no_panic() {
        let out = truncate("日本語のニュースの見出しです", 8);
        assert!(out.width() <= 8);
    }
}
