//! HTTP price fetcher.

use crate::parser::{compile_selector, parse_price_html};
use crate::{FetchError, FetchResult};
use async_trait::async_trait;
use gold_core::Price;
use std::time::Duration;
use tracing::{debug, warn};

/// Anything that can produce the current gold price.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the price once. No retries.
    async fn fetch_price(&self) -> FetchResult<Price>;
}

/// Configuration for [`MilliGoldFetcher`].
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Page to scrape.
    pub url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Sent as the `User-Agent` header.
    pub user_agent: String,
    /// CSS selector of the element holding the price.
    pub price_selector: String,
}

impl FetcherConfig {
    pub const DEFAULT_URL: &'static str = "https://milli.gold";
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: "Mozilla/5.0".to_string(),
            price_selector: "span.info-price".to_string(),
        }
    }
}

/// Scrapes the gold price from milli.gold.
pub struct MilliGoldFetcher {
    client: reqwest::Client,
    config: FetcherConfig,
}

impl MilliGoldFetcher {
    /// Build the HTTP client. Fails on an unparseable selector.
    pub fn new(config: FetcherConfig) -> FetchResult<Self> {
        compile_selector(&config.price_selector)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, config })
    }

    async fn fetch(&self) -> FetchResult<Price> {
        let response = self.client.get(&self.config.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_price_html(&body, &self.config.price_selector)
    }
}

#[async_trait]
impl PriceSource for MilliGoldFetcher {
    async fn fetch_price(&self) -> FetchResult<Price> {
        let result = self.fetch().await;
        match &result {
            Ok(price) => debug!(url = %self.config.url, price = %price, "Fetched gold price"),
            Err(e) => warn!(
                url = %self.config.url,
                timeout = e.is_timeout(),
                error = %e,
                "Failed to fetch gold price"
            ),
        }
        result
    }
}
