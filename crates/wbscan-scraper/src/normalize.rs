//! Normalization from raw upstream items to [`wbscan_core::ProductRecord`].
//!
//! The search and catalog endpoints disagree on field names for ratings and
//! feedback counts, so both fields read through [`first_filled`] — the one
//! place the precedence order is defined.

use std::collections::BTreeMap;

use wbscan_core::ProductRecord;

use crate::types::{RawProduct, RawSize};

/// Ordered-fallback field selection.
///
/// Returns the first candidate that is present AND non-zero. The upstream
/// reports unrated items either by omitting the field or by sending `0`, so
/// a zero counts as unfilled and falls through to the next candidate —
/// `reviewRating` first, then the older `rating`, same for the feedback
/// counts.
fn first_filled<T: Copy + Default + PartialEq>(candidates: &[Option<T>]) -> Option<T> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| *value != T::default())
}

/// Converts a minor-unit price (kopecks) to major units: `125000` → `1250.0`.
#[allow(clippy::cast_precision_loss)]
fn minor_to_major(minor: u64) -> f64 {
    minor as f64 / 100.0
}

/// Total quantity across all size entries. Per entry, a present `stocks`
/// list (even an empty one) supersedes the size-level `qty`; missing
/// quantities count as 0.
fn total_stock(sizes: &[RawSize]) -> u32 {
    sizes
        .iter()
        .map(|size| match &size.stocks {
            Some(stocks) => stocks.iter().map(|s| s.qty.unwrap_or(0)).sum(),
            None => size.qty.unwrap_or(0),
        })
        .sum()
}

/// Normalizes a raw list item into a [`ProductRecord`].
///
/// List endpoints never expose attribute detail, so `params` is always
/// empty here; [`normalize_detail`] is the only producer of a non-empty map.
#[must_use]
pub fn normalize_listing(raw: RawProduct) -> ProductRecord {
    ProductRecord {
        id: raw.id,
        name: raw.name.unwrap_or_default(),
        brand: raw.brand.unwrap_or_default(),
        price: minor_to_major(raw.sale_price_u),
        rating: first_filled(&[raw.review_rating, raw.rating]).unwrap_or(0.0),
        reviews: first_filled(&[raw.feedbacks, raw.feedback_count]).unwrap_or(0),
        stock: total_stock(&raw.sizes),
        params: BTreeMap::new(),
    }
}

/// Normalizes a raw card-detail item, additionally mapping its `options`
/// pairs into `params`. Pairs with an empty name are dropped; duplicate
/// names keep the last value.
#[must_use]
pub fn normalize_detail(raw: RawProduct) -> ProductRecord {
    let params: BTreeMap<String, String> = raw
        .options
        .iter()
        .filter(|option| !option.name.is_empty())
        .map(|option| (option.name.clone(), option.value.clone()))
        .collect();

    ProductRecord {
        params,
        ..normalize_listing(raw)
    }
}
