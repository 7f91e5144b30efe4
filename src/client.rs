//! HTTP client for the two news backend endpoints.
//!
//! The backend is an external collaborator; only its request/response shape
//! is consumed here:
//!
//! - `GET {base}/news?limit={n}` — JSON array of articles
//! - `POST {base}/refresh_news` — fire-and-forget ingest trigger
//!
//! The base endpoint is an explicit constructor argument (never a global),
//! so tests can point a client at a wiremock server.

use crate::model::Article;
use thiserror::Error;

/// Placeholder shipped in the default config. A client configured with this
/// value (or an empty string) refuses to issue any request, so a fresh
/// install fails loudly instead of sending traffic to a literal placeholder.
pub const UNSET_BASE_URL: &str = "https://your-backend.example.com";

#[derive(Debug, Error)]
pub enum FeedError {
    /// Base endpoint is still the placeholder (or empty).
    #[error("API base URL is not configured")]
    Unconfigured,
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// HTTP response with a non-2xx status code (fetch path only).
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Body was not valid JSON, or not shaped as an article array.
    #[error("Malformed response body: {0}")]
    Parse(String),
}

/// Typed wrapper over the backend's two operations.
///
/// Cheap to clone: `reqwest::Client` is an `Arc` internally, so clones share
/// the connection pool. No retries, no client-side timeout, no request
/// coordination — one attempt per user action, transport defaults apply.
#[derive(Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    base: String,
}

impl FeedClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Return the base endpoint, or refuse if it is still the placeholder.
    fn base(&self) -> Result<&str, FeedError> {
        if self.base.is_empty() || self.base == UNSET_BASE_URL.trim_end_matches('/') {
            tracing::warn!("Refusing request: API base URL is unset");
            return Err(FeedError::Unconfigured);
        }
        Ok(&self.base)
    }

    /// Fetch up to `limit` articles, in the order the backend returns them.
    pub async fn fetch_articles(&self, limit: usize) -> Result<Vec<Article>, FeedError> {
        let base = self.base()?;
        let url = format!("{}/news", base);
        tracing::debug!(%url, limit, "Fetching articles");

        let response = self
            .http
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                "News endpoint returned an error status"
            );
            return Err(FeedError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let articles: Vec<Article> = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, "News response was not a JSON article array");
            FeedError::Parse(e.to_string())
        })?;

        tracing::debug!(count = articles.len(), "Fetched articles");
        Ok(articles)
    }

    /// Ask the backend to ingest new articles.
    ///
    /// The refresh job runs asynchronously server-side and its completion is
    /// never observed here. Any completed response — even a non-2xx one —
    /// counts as success; the status code is intentionally left unchecked
    /// (known gap, see DESIGN.md). Only a transport failure is an error.
    pub async fn trigger_refresh(&self) -> Result<(), FeedError> {
        let base = self.base()?;
        let url = format!("{}/refresh_news", base);
        tracing::info!(%url, "Triggering backend news refresh");

        let response = self.http.post(&url).send().await?;
        tracing::debug!(
            status = response.status().as_u16(),
            "Refresh trigger completed"
        );
        Ok(())
    }
}
