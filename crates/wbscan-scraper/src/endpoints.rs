//! Upstream endpoint resolution.
//!
//! Each request variant maps to one catalog endpoint with a fixed parameter
//! set (currency, destination region, sort order, price-adjustment flag)
//! plus the variant's own selector. The page number is appended last so the
//! page loop can rebuild the URL per iteration.
//!
//! All query values go through [`reqwest::Url`], which percent-encodes the
//! free-text search query.

use reqwest::Url;

use crate::error::ScraperError;
use crate::request::RetrievalRequest;

pub(crate) const SEARCH_BASE: &str = "https://search.wb.ru/exactmatch/ru/common/v4/search";
pub(crate) const SELLER_CATALOG_BASE: &str = "https://catalog.wb.ru/sellers/catalog";
pub(crate) const BRAND_CATALOG_BASE: &str = "https://catalog.wb.ru/brands/catalog";
pub(crate) const CARD_DETAIL_BASE: &str = "https://card.wb.ru/cards/detail";

/// Fixed parameters shared by every catalog/search request. `dest` pins the
/// destination region the stock counts are computed for; `spp=0` disables
/// buyer-specific price adjustments so prices are comparable across runs.
const COMMON_PARAMS: [(&str, &str); 5] = [
    ("appType", "1"),
    ("curr", "rub"),
    ("dest", "-1257786"),
    ("sort", "popular"),
    ("spp", "0"),
];

/// Builds the upstream URL for one page of the given request.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if the endpoint base fails to parse
/// (never expected for the built-in bases; kept as an error so callers
/// propagate instead of panicking).
pub fn page_url(request: &RetrievalRequest, page: u32) -> Result<Url, ScraperError> {
    let (base, selector, value) = match request {
        RetrievalRequest::Search { query } => (SEARCH_BASE, "query", query.as_str()),
        RetrievalRequest::BySeller { seller_id } => {
            (SELLER_CATALOG_BASE, "supplier", seller_id.as_str())
        }
        RetrievalRequest::ByBrand { brand_id } => {
            (BRAND_CATALOG_BASE, "brand", brand_id.as_str())
        }
    };

    let mut url = parse_base(base)?;
    {
        let mut pairs = url.query_pairs_mut();
        for (key, val) in COMMON_PARAMS {
            pairs.append_pair(key, val);
        }
        pairs.append_pair(selector, value);
        pairs.append_pair("page", &page.to_string());
    }
    Ok(url)
}

/// Builds the card-detail URL for a single article lookup.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if the endpoint base fails to parse.
pub fn detail_url(article: i64) -> Result<Url, ScraperError> {
    let mut url = parse_base(CARD_DETAIL_BASE)?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("appType", "1");
        pairs.append_pair("curr", "rub");
        pairs.append_pair("dest", "-1257786");
        pairs.append_pair("nm", &article.to_string());
    }
    Ok(url)
}

fn parse_base(base: &str) -> Result<Url, ScraperError> {
    Url::parse(base).map_err(|e| ScraperError::InvalidUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })
}
