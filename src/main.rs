use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;

use newsdeck::app::{App, AppEvent};
use newsdeck::client::FeedClient;
use newsdeck::config::Config;
use newsdeck::ui;

/// Get the config file path (~/.config/newsdeck/config.toml)
fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("newsdeck")
        .join("config.toml"))
}

#[derive(Parser, Debug)]
#[command(name = "newsdeck", about = "Terminal news feed viewer")]
struct Args {
    /// Base URL of the news backend (overrides the config file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Maximum number of articles to fetch per load
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    limit: Option<u64>,

    /// Path to an alternate config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    // CLI flags override the file
    let base_url = args.base_url.unwrap_or(config.api_base_url);
    let limit = args.limit.map(|n| n as usize).unwrap_or(config.limit);

    // No request timeout and no retries: one attempt per user action,
    // transport defaults apply.
    let http = reqwest::Client::builder()
        .user_agent(concat!("newsdeck/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let client = FeedClient::new(http, &base_url);
    let mut app = App::new(client, limit);

    // Create event channel for background tasks
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    // Run the TUI (spawns the initial load itself)
    ui::run(&mut app, event_tx, event_rx).await?;

    println!("Goodbye!");
    Ok(())
}
