//! Direct-request strategy: one GET against the search endpoint

use rand::Rng;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, UPGRADE_INSECURE_REQUESTS,
};
use std::ops::RangeInclusive;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use super::types::RawPage;
use crate::config::ScrapeConfig;
use crate::error::AcquisitionError;
use crate::query::SearchQuery;
use crate::utils::{LOG_QUERY_CHARS, safe_truncate_chars};

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE_EN: &str = "en-US,en;q=0.5";

/// Fetches result markup with a browser-like HTTP client
pub struct RequestAcquirer {
    client: reqwest::Client,
    search_url: Url,
    language: String,
    delay_ms: RangeInclusive<u64>,
}

impl RequestAcquirer {
    /// Build the client and its default header set.
    ///
    /// # Errors
    /// `AcquisitionError::Http` if the client cannot be constructed.
    pub fn new(config: &ScrapeConfig) -> Result<Self, AcquisitionError> {
        Ok(Self {
            client: build_client(config)?,
            search_url: config.search_url().clone(),
            language: config.language().to_string(),
            delay_ms: config.request_delay_ms(),
        })
    }

    /// Pause for a random delay, then GET `search_url?q=..&num=..&hl=..`.
    ///
    /// No retry: any failure is returned to the caller.
    ///
    /// # Errors
    /// `HttpStatus` for a non-success status, `Http` when the request
    /// cannot be sent or the body cannot be read.
    pub async fn acquire(&self, query: &SearchQuery) -> Result<RawPage, AcquisitionError> {
        let url = query.to_search_url(&self.search_url, &self.language);

        let delay = self.pick_delay();
        if !delay.is_zero() {
            debug!("Pausing {:?} before request", delay);
            tokio::time::sleep(delay).await;
        }

        info!(
            "Searching for: {}",
            safe_truncate_chars(query.text(), LOG_QUERY_CHARS)
        );
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AcquisitionError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AcquisitionError::HttpStatus(status.as_u16()));
        }

        let final_url = response.url().clone();
        let html = response
            .text()
            .await
            .map_err(|e| AcquisitionError::Http(format!("failed to read response body: {e}")))?;

        info!(bytes = html.len(), "Search completed successfully");
        Ok(RawPage::new(html, final_url))
    }

    fn pick_delay(&self) -> Duration {
        Duration::from_millis(rand::rng().random_range(self.delay_ms.clone()))
    }
}

fn build_client(config: &ScrapeConfig) -> Result<reqwest::Client, AcquisitionError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_EN));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));

    let mut builder = reqwest::Client::builder()
        .user_agent(config.user_agent())
        .default_headers(headers);

    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|e| AcquisitionError::Http(format!("failed to build HTTP client: {e}")))
}
