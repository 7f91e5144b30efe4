//! Article data model and the card view-model derived from it.
//!
//! `Article` mirrors the JSON shape the backend returns from `GET /news`.
//! `ArticleCard` is the pure display mapping — all fallback text for missing
//! optional fields is resolved here so rendering can never fail on absent
//! data, and so the mapping is testable without a terminal.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// Shown in place of a missing summary.
pub const FALLBACK_SUMMARY: &str = "No summary available.";
/// Badge text for articles the backend did not categorize.
pub const FALLBACK_CATEGORY: &str = "General";
/// Stands in for both the sentiment label and score when absent.
pub const FALLBACK_SENTIMENT: &str = "N/A";

/// A single news item as returned by the backend.
///
/// Articles are transient: fetched fresh on each load, held only for the
/// duration of a render pass, discarded on the next fetch. Nothing here is
/// created or mutated client-side.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub title: String,
    /// Publisher name, used as a display label.
    pub source: String,
    /// Publication timestamp as the backend serialized it (ISO 8601 or a
    /// bare date). Parsed leniently for display; the raw string is shown
    /// if parsing fails.
    pub published_date: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Outbound link to the full article.
    pub url: String,
    /// Precomputed by the backend's ML pipeline; never computed client-side.
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
}

/// Label/score pair describing the emotional polarity of an article.
#[derive(Debug, Clone, Deserialize)]
pub struct Sentiment {
    pub score: f64,
    pub label: String,
}

/// Badge color class for the sentiment indicator.
///
/// Only "POSITIVE" gets the positive color; every other label — including
/// "NEGATIVE", unknown labels, and absent sentiment — uses the other tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentTone {
    Positive,
    Other,
}

/// Display-ready card derived from one [`Article`].
///
/// Every field is fully resolved text; no `Option` survives past this point.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleCard {
    pub title: String,
    /// "source - localized date".
    pub subtitle: String,
    /// Summary text or [`FALLBACK_SUMMARY`].
    pub body: String,
    /// Category badge text or [`FALLBACK_CATEGORY`].
    pub category: String,
    /// "LABEL (score)" with the score to two decimals, or "N/A (N/A)".
    pub sentiment_text: String,
    pub tone: SentimentTone,
    pub url: String,
}

impl ArticleCard {
    /// Map an [`Article`] into its display form, applying all fallbacks.
    pub fn from_article(article: &Article) -> Self {
        let (sentiment_text, tone) = match &article.sentiment {
            Some(s) => (
                format!("{} ({:.2})", s.label, s.score),
                if s.label == "POSITIVE" {
                    SentimentTone::Positive
                } else {
                    SentimentTone::Other
                },
            ),
            None => (
                format!("{} ({})", FALLBACK_SENTIMENT, FALLBACK_SENTIMENT),
                SentimentTone::Other,
            ),
        };

        Self {
            title: article.title.clone(),
            subtitle: format!(
                "{} - {}",
                article.source,
                format_published(&article.published_date)
            ),
            body: article
                .summary
                .clone()
                .unwrap_or_else(|| FALLBACK_SUMMARY.to_string()),
            category: article
                .category
                .clone()
                .unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
            sentiment_text,
            tone,
            url: article.url.clone(),
        }
    }
}

/// Build cards for a fetched article list, preserving backend order.
pub fn build_cards(articles: &[Article]) -> Vec<ArticleCard> {
    articles.iter().map(ArticleCard::from_article).collect()
}

/// Format a backend timestamp as a short local date.
///
/// Tries RFC 3339 first (what the backend emits for datetimes), then a naive
/// datetime, then a plain date. Unparseable input is shown as-is rather than
/// failing the render.
fn format_published(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format("%x").to_string();
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return ndt.date().format("%x").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%x").to_string();
    }
    raw.to_string()
}
