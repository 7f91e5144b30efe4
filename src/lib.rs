//! newsdeck — a terminal news feed viewer.
//!
//! Fetches processed news articles from a remote backend and renders them as
//! cards, with a manual fire-and-forget refresh trigger. See the module docs:
//!
//! - [`client`] — typed HTTP client for the backend's two endpoints
//! - [`model`] — article data model and the card view-model
//! - [`app`] — view state machine (Loading/Rendered/Errored)
//! - [`config`] — TOML config with CLI overrides
//! - [`ui`] — ratatui rendering and the event loop

pub mod app;
pub mod client;
pub mod config;
pub mod model;
pub mod ui;
