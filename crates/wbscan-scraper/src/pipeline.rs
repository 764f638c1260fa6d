//! Paginated retrieval loops for [`PipelineClient`].
//!
//! Pages are fetched strictly sequentially with a fixed pause between them.
//! Sequential fetching is load-bearing: it bounds the request rate the
//! upstream sees (the catalog endpoints block aggressive clients) and keeps
//! result order deterministic — records arrive in upstream page order and
//! are appended in that order, no reordering, no deduplication.

use std::time::Duration;

use wbscan_core::{ProductRecord, ResultSet};

use crate::client::PipelineClient;
use crate::endpoints;
use crate::error::ScraperError;
use crate::normalize::{normalize_detail, normalize_listing};
use crate::request::RetrievalRequest;

impl PipelineClient {
    /// Runs one retrieval: validates the request, then walks the matching
    /// endpoint page by page, normalizing and accumulating records.
    ///
    /// Termination, in priority order:
    /// 1. a page with an absent or empty product list — the authoritative
    ///    end-of-results signal;
    /// 2. accumulated count ≥ the upstream-reported total — best-effort
    ///    only, since catalog endpoints sometimes report `total` as 0 even
    ///    when more results exist (0/absent means "unknown");
    /// 3. the page cap.
    ///
    /// An empty result is `Ok` — it signals "no matches", not a failure.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Validation`] — malformed request, before any fetch.
    /// - [`ScraperError::Http`] / [`ScraperError::UnexpectedStatus`] /
    ///   [`ScraperError::Deserialize`] — propagated from the failing page;
    ///   records accumulated from earlier pages are discarded.
    pub async fn retrieve(&self, request: &RetrievalRequest) -> Result<ResultSet, ScraperError> {
        request.validate()?;

        let mut records: ResultSet = Vec::new();
        let mut page: u32 = 1;

        loop {
            let target = endpoints::page_url(request, page)?;
            let response = self
                .fetch_json(&target, &format!("catalog page {page}"))
                .await?;

            let data = response.data.unwrap_or_default();
            if data.products.is_empty() {
                tracing::debug!(page, "empty page, end of results");
                break;
            }

            records.extend(data.products.into_iter().map(normalize_listing));
            tracing::debug!(
                page,
                accumulated = records.len(),
                total = data.total,
                "page normalized"
            );

            if data.total > 0 && records.len() as u64 >= data.total {
                break;
            }
            if page >= self.max_pages {
                tracing::debug!(max_pages = self.max_pages, "page cap reached");
                break;
            }

            page += 1;
            if self.inter_page_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.inter_page_delay_ms)).await;
            }
        }

        Ok(records)
    }

    /// Looks up a single product by article number via the card-detail
    /// endpoint and returns it with its attribute `params` populated.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::ItemNotFound`] — the article matched nothing.
    /// - Network/parse errors as in [`PipelineClient::retrieve`].
    pub async fn retrieve_item(&self, article: i64) -> Result<ProductRecord, ScraperError> {
        let target = endpoints::detail_url(article)?;
        let response = self
            .fetch_json(&target, &format!("card detail for article {article}"))
            .await?;

        let raw = response
            .data
            .unwrap_or_default()
            .products
            .into_iter()
            .next()
            .ok_or(ScraperError::ItemNotFound { article })?;

        Ok(normalize_detail(raw))
    }
}
