//! Raw response types for the marketplace catalog, search, and card-detail
//! endpoints.
//!
//! ## Observed shape
//!
//! All three list endpoints (search, seller catalog, brand catalog) share one
//! envelope: `{"data": {"products": [...], "total": N}}`. The card-detail
//! endpoint reuses it with a single-element product list.
//!
//! ### Field variance between endpoints
//! The search endpoint reports ratings as `reviewRating` and counts as
//! `feedbacks`; the catalog endpoints may instead (or additionally) send the
//! older `rating` / `feedbackCount` names. Every field the upstream is known
//! to omit carries `#[serde(default)]` so a missing field never fails the
//! page.
//!
//! ### `salePriceU`
//! Price in minor currency units (kopecks): `125000` means 1250.00 rubles.
//! Division by 100 happens in normalization, not here.
//!
//! ### `sizes` and `stocks`
//! Stock lives under size variants. A size entry either carries its own
//! `qty` or a `stocks` list with per-warehouse `qty` values; when `stocks`
//! is present it supersedes the size-level `qty` (including when it is an
//! empty list). `stocks` is therefore an `Option<Vec<_>>`, not a defaulted
//! `Vec`, so present-but-empty and absent stay distinguishable.
//!
//! ### `total`
//! The catalog endpoints sometimes report `total` as `0` even when more
//! results exist; `0` means "unknown" and only ever shortens, never extends,
//! pagination.

use serde::Deserialize;

/// Envelope of every list and detail response.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    /// Absent on some error bodies; treated as an empty product list.
    #[serde(default)]
    pub data: Option<CatalogData>,
}

/// Payload of a list response.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogData {
    /// Product list for this page. Absent or empty signals end of results.
    #[serde(default)]
    pub products: Vec<RawProduct>,
    /// Upstream-reported total result count; `0` means unknown.
    #[serde(default)]
    pub total: u64,
}

/// A single raw product item as the upstream returns it.
#[derive(Debug, Default, Deserialize)]
pub struct RawProduct {
    /// Article number.
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub brand: Option<String>,

    /// Sale price in minor currency units.
    #[serde(rename = "salePriceU", default)]
    pub sale_price_u: u64,

    /// Average review rating (search endpoint name).
    #[serde(rename = "reviewRating", default)]
    pub review_rating: Option<f64>,

    /// Average review rating (catalog endpoint fallback name).
    #[serde(default)]
    pub rating: Option<f64>,

    /// Feedback count (primary name).
    #[serde(default)]
    pub feedbacks: Option<u32>,

    /// Feedback count (catalog endpoint fallback name).
    #[serde(rename = "feedbackCount", default)]
    pub feedback_count: Option<u32>,

    /// Size variants carrying stock quantities.
    #[serde(default)]
    pub sizes: Vec<RawSize>,

    /// Attribute pairs; only the card-detail endpoint populates this.
    #[serde(default)]
    pub options: Vec<RawOption>,
}

/// One size variant of a product.
#[derive(Debug, Default, Deserialize)]
pub struct RawSize {
    /// Size-level quantity; used only when `stocks` is absent.
    #[serde(default)]
    pub qty: Option<u32>,

    /// Per-warehouse stock entries; supersedes `qty` when present.
    #[serde(default)]
    pub stocks: Option<Vec<RawStock>>,
}

/// One per-warehouse stock entry.
#[derive(Debug, Default, Deserialize)]
pub struct RawStock {
    #[serde(default)]
    pub qty: Option<u32>,
}

/// One name/value attribute pair from the card-detail endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RawOption {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_search_shape() {
        let body = r#"{
            "data": {
                "products": [{
                    "id": 12345678,
                    "name": "Hand cream",
                    "brand": "BeautyNature",
                    "salePriceU": 125000,
                    "reviewRating": 4.8,
                    "feedbacks": 1890,
                    "sizes": [{"stocks": [{"qty": 12}, {"qty": 8}]}]
                }],
                "total": 1
            }
        }"#;
        let parsed: CatalogResponse = serde_json::from_str(body).unwrap();
        let data = parsed.data.unwrap();
        assert_eq!(data.total, 1);
        let product = &data.products[0];
        assert_eq!(product.id, 12_345_678);
        assert_eq!(product.sale_price_u, 125_000);
        assert_eq!(product.review_rating, Some(4.8));
        assert_eq!(product.feedbacks, Some(1890));
    }

    #[test]
    fn deserializes_catalog_fallback_field_names() {
        let body = r#"{
            "data": {
                "products": [{
                    "id": 1,
                    "rating": 4.2,
                    "feedbackCount": 77
                }]
            }
        }"#;
        let parsed: CatalogResponse = serde_json::from_str(body).unwrap();
        let product = &parsed.data.unwrap().products[0];
        assert_eq!(product.rating, Some(4.2));
        assert_eq!(product.feedback_count, Some(77));
        assert!(product.review_rating.is_none());
        assert_eq!(product.sale_price_u, 0);
    }

    #[test]
    fn missing_data_field_parses_to_none() {
        let parsed: CatalogResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.data.is_none());
    }

    #[test]
    fn empty_stocks_list_stays_distinct_from_absent() {
        let with_empty: RawSize = serde_json::from_str(r#"{"qty": 5, "stocks": []}"#).unwrap();
        assert_eq!(with_empty.qty, Some(5));
        assert!(matches!(with_empty.stocks.as_deref(), Some([])));

        let without: RawSize = serde_json::from_str(r#"{"qty": 5}"#).unwrap();
        assert!(without.stocks.is_none());
    }
}
