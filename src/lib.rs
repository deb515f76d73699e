//! Kleinanzeigen scraper
//!
//! Extraction engine for eBay Kleinanzeigen search result and ad detail
//! pages, plus a small command line tool that pages through a configured
//! search and prints the results as JSON.

pub mod application;
pub mod domain;
pub mod infrastructure;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub use application::{SearchOutcome, SearchUseCases};
pub use domain::{ListingPage, ListingSummary, Record, SearchParam};
pub use infrastructure::{AppConfig, MarketplaceCollector, extract_listing_page, extract_record};

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "KLEINANZEIGEN_CONFIG";

/// Config path from the first argument, then the environment, then the default location
pub fn config_path(args: &[String]) -> String {
    args.get(1)
        .cloned()
        .or_else(|| std::env::var(CONFIG_PATH_ENV).ok())
        .unwrap_or_else(|| infrastructure::config::DEFAULT_CONFIG_PATH.to_string())
}

/// Command line entry point
pub async fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let path = config_path(&args);

    let config = AppConfig::load(&path).with_context(|| format!("Failed to load configuration from {path}"))?;
    infrastructure::logging::init_logging_with_config(&config.logging)?;
    info!("Kleinanzeigen scraper v{}", env!("CARGO_PKG_VERSION"));

    let cancellation_token = CancellationToken::new();
    let shutdown = cancellation_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, stopping after the current request");
            shutdown.cancel();
        }
    });

    let collector = MarketplaceCollector::with_cancellation(&config, cancellation_token)?;
    let use_cases = SearchUseCases::new(collector, config.crawl.clone());
    let outcome = use_cases.run(&config.search).await?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
