//! HTTP client that routes every upstream request through the relay.
//!
//! The pipeline never talks to the marketplace directly: each target URL is
//! wrapped into `GET {relay}/proxy?url=<encoded target>` and the relay
//! performs the actual fetch. The relay returns the upstream body verbatim,
//! so response parsing here is the same as it would be against the upstream.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::types::CatalogResponse;

/// Client for the retrieval pipeline.
///
/// Holds the HTTP client, the resolved relay proxy URL, and the pagination
/// policy (inter-page delay, page cap) the page loop runs under.
pub struct PipelineClient {
    pub(crate) client: Client,
    pub(crate) proxy_url: Url,
    /// Fixed pause between sequential page fetches, in milliseconds.
    pub(crate) inter_page_delay_ms: u64,
    /// Hard cap on pages fetched per retrieval.
    pub(crate) max_pages: u32,
}

impl PipelineClient {
    /// Creates a client routed through the relay at `relay_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ScraperError::InvalidUrl`] if `relay_url`
    /// does not parse as an absolute URL.
    pub fn new(
        relay_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        inter_page_delay_ms: u64,
        max_pages: u32,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base ends with exactly one slash so `join`
        // appends "proxy" instead of replacing the last path segment.
        let normalised = format!("{}/", relay_url.trim_end_matches('/'));
        let proxy_url = Url::parse(&normalised)
            .and_then(|base| base.join("proxy"))
            .map_err(|e| ScraperError::InvalidUrl {
                url: relay_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            proxy_url,
            inter_page_delay_ms,
            max_pages,
        })
    }

    /// Creates a client from the shared [`wbscan_core::AppConfig`].
    ///
    /// # Errors
    ///
    /// Same failure modes as [`PipelineClient::new`].
    pub fn from_config(config: &wbscan_core::AppConfig) -> Result<Self, ScraperError> {
        Self::new(
            &config.relay_url,
            config.request_timeout_secs,
            &config.user_agent,
            config.inter_page_delay_ms,
            config.max_pages,
        )
    }

    /// Fetches `target` through the relay and parses the catalog envelope.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] — transport failure reaching the relay.
    /// - [`ScraperError::UnexpectedStatus`] — relay responded non-2xx
    ///   (missing-parameter 400, upstream transport failure 500, ...).
    /// - [`ScraperError::Deserialize`] — body is not the expected envelope.
    pub(crate) async fn fetch_json(
        &self,
        target: &Url,
        context: &str,
    ) -> Result<CatalogResponse, ScraperError> {
        let mut url = self.proxy_url.clone();
        url.query_pairs_mut().append_pair("url", target.as_str());

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: target.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<CatalogResponse>(&body).map_err(|e| ScraperError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
