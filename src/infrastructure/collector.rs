//! Marketplace collector
//!
//! Fetches search result pages and ad detail pages through the rate limited
//! HTTP client and hands the bytes to the page parsers. Parsing happens in
//! plain functions so the (non-`Send`) document never lives across an await.

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use url::Url;

use crate::domain::{ListingPage, Record, SearchParam};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http_client::HttpClient;
use crate::infrastructure::parsing::{DocumentParser, ListingPageParser, RecordParser};

pub struct MarketplaceCollector {
    http_client: HttpClient,
    listing_parser: ListingPageParser,
    record_parser: RecordParser,
    cancellation_token: CancellationToken,
}

impl MarketplaceCollector {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_cancellation(config, CancellationToken::new())
    }

    pub fn with_cancellation(config: &AppConfig, cancellation_token: CancellationToken) -> Result<Self> {
        Ok(Self {
            http_client: HttpClient::new(&config.http)?,
            listing_parser: ListingPageParser::with_config(&config.parsing.listing_selectors)?,
            record_parser: RecordParser::with_config(&config.parsing.record_selectors)?,
            cancellation_token,
        })
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation_token
    }

    /// Fetch and extract the result page described by `search`
    pub async fn fetch_listing_page(&self, search: &SearchParam) -> Result<ListingPage> {
        let url = search_url(search)?;
        let body = self
            .http_client
            .get_bytes_with_cancellation(url.as_str(), &self.cancellation_token)
            .await?;

        let page = self
            .listing_parser
            .parse_bytes(&body)
            .with_context(|| format!("Failed to extract listing page {url}"))?;

        info!(
            "Page {}/{}: {} listings",
            page.current_page,
            page.last_page,
            page.items.len()
        );
        Ok(page)
    }

    /// Fetch and extract a single ad detail page
    pub async fn fetch_record(&self, link: &str) -> Result<Record> {
        let url = Url::parse(link).with_context(|| format!("Invalid ad link: {link}"))?;
        let body = self
            .http_client
            .get_bytes_with_cancellation(url.as_str(), &self.cancellation_token)
            .await?;

        let record = self
            .record_parser
            .parse_bytes(&body)
            .with_context(|| format!("Failed to extract record {url}"))?;

        if record.id.is_none() {
            warn!("No ad number found on {}", url);
        }

        Ok(record)
    }
}

/// Build and validate the search URL
pub fn search_url(search: &SearchParam) -> Result<Url> {
    let url = search.to_url();
    Url::parse(&url).with_context(|| format!("Invalid search URL: {url}"))
}
