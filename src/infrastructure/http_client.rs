//! HTTP client for fetching marketplace pages with rate limiting
//!
//! Provides a polite HTTP client for scraping: one shared quota for every
//! request, a fixed user agent, and cancellation support. No retries; a failed
//! request is reported to the caller.

use std::num::NonZeroU32;
use std::time::Duration;

use anyhow::{Context, Result};
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, direct::NotKeyed},
};
use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::infrastructure::config::defaults;

/// HTTP client configuration for crawling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_requests_per_minute: u32,
    pub follow_redirects: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::USER_AGENT.to_string(),
            timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            max_requests_per_minute: defaults::MAX_REQUESTS_PER_MINUTE,
            follow_redirects: true,
        }
    }
}

/// HTTP client with a direct rate limiter
pub struct HttpClient {
    client: Client,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: &HttpClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).context("Invalid user agent")?,
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("de-DE,de;q=0.9"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()
            .context("Failed to create HTTP client")?;

        let quota = Quota::per_minute(
            NonZeroU32::new(config.max_requests_per_minute)
                .context("Rate limit must be greater than 0")?,
        );

        Ok(Self {
            client,
            rate_limiter: RateLimiter::direct(quota),
        })
    }

    /// Fetch a URL once the rate limiter allows it
    pub async fn get(&self, url: &str) -> Result<Response> {
        self.rate_limiter.until_ready().await;

        tracing::info!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch URL: {url}"))?;

        ensure_ok(&response, url)?;
        Ok(response)
    }

    /// Fetch a URL and return the raw body
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.get(url).await?;
        let body = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read response body from: {url}"))?;

        tracing::debug!("Fetched {} ({} bytes)", url, body.len());
        Ok(body.to_vec())
    }

    /// Fetch a URL and return the raw body, giving up when `cancellation_token` fires
    pub async fn get_bytes_with_cancellation(
        &self,
        url: &str,
        cancellation_token: &CancellationToken,
    ) -> Result<Vec<u8>> {
        if cancellation_token.is_cancelled() {
            anyhow::bail!("Request cancelled before starting");
        }

        tokio::select! {
            result = self.get_bytes(url) => result,
            () = cancellation_token.cancelled() => {
                tracing::warn!("🛑 HTTP request cancelled for URL: {}", url);
                anyhow::bail!("HTTP request cancelled");
            }
        }
    }
}

fn ensure_ok(response: &Response, url: &str) -> Result<()> {
    if response.status() != StatusCode::OK {
        anyhow::bail!("Unexpected status code {} for {}", response.status(), url);
    }
    Ok(())
}
