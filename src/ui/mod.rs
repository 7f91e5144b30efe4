//! Terminal User Interface module.
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `events` - Background task event processing
//! - `render` - Frame layout dispatch
//! - `helpers` - Background task spawning
//! - `cards` - Article card list widget
//! - `status` - Header and status bar widgets

mod cards;
mod events;
mod helpers;
mod input;
mod loop_runner;
mod render;
mod status;

// Re-export the public API
pub use loop_runner::{run, Action};
