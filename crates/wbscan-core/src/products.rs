use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A product listing normalized from the marketplace's catalog or search
/// endpoints into a flat shape shared by the table, chart, and export layers.
///
/// Every scalar field is always populated with a safe default (empty string,
/// zero) so consumers never branch on absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Upstream product identifier (article number).
    pub id: i64,
    /// Display name. Empty string when the upstream omits it.
    pub name: String,
    /// Brand name. Empty string when the upstream omits it.
    pub brand: String,
    /// Sale price in major currency units (upstream minor units ÷ 100).
    pub price: f64,
    /// Average review rating; `0.0` when the upstream reports none.
    pub rating: f64,
    /// Review / feedback count; `0` when the upstream reports none.
    pub reviews: u32,
    /// Total available quantity summed across all size and warehouse entries.
    pub stock: u32,
    /// Free-form attributes (name → value). Empty for list retrievals; the
    /// single-item detail lookup is the only source that populates this.
    pub params: BTreeMap<String, String>,
}

/// The full ordered output of one retrieval call.
///
/// Request-scoped: each `retrieve` invocation produces a fresh `ResultSet`
/// that replaces whatever the caller held before. Records keep upstream
/// order, concatenated across pages without deduplication.
pub type ResultSet = Vec<ProductRecord>;

impl ProductRecord {
    /// Returns the union of param keys across `records`, sorted.
    ///
    /// Used by the export layer to derive one column per distinct attribute.
    #[must_use]
    pub fn union_param_keys(records: &[ProductRecord]) -> Vec<String> {
        let mut keys: Vec<String> = records
            .iter()
            .flat_map(|r| r.params.keys().cloned())
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_params(pairs: &[(&str, &str)]) -> ProductRecord {
        ProductRecord {
            id: 1,
            name: "Test".to_string(),
            brand: "Brand".to_string(),
            price: 10.0,
            rating: 4.5,
            reviews: 3,
            stock: 7,
            params: pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    #[test]
    fn union_param_keys_merges_and_sorts() {
        let records = vec![
            record_with_params(&[("Volume", "50 ml"), ("Skin type", "dry")]),
            record_with_params(&[("Volume", "30 ml"), ("Active", "vitamin C")]),
        ];
        assert_eq!(
            ProductRecord::union_param_keys(&records),
            vec!["Active", "Skin type", "Volume"]
        );
    }

    #[test]
    fn union_param_keys_empty_for_no_params() {
        let records = vec![record_with_params(&[]), record_with_params(&[])];
        assert!(ProductRecord::union_param_keys(&records).is_empty());
    }

    #[test]
    fn record_serializes_with_all_fields() {
        let json = serde_json::to_value(record_with_params(&[("Volume", "50 ml")])).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["price"], 10.0);
        assert_eq!(json["params"]["Volume"], "50 ml");
    }
}
