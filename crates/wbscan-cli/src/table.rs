//! Fixed-width terminal table over a result set.

use wbscan_core::ProductRecord;

const NAME_WIDTH: usize = 40;
const BRAND_WIDTH: usize = 18;

/// Renders one row per record under a fixed header. Long names and brands
/// are truncated with an ellipsis so columns stay aligned.
#[must_use]
pub fn render(records: &[ProductRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>10}  {:<NAME_WIDTH$}  {:<BRAND_WIDTH$}  {:>10}  {:>6}  {:>8}  {:>7}\n",
        "id", "name", "brand", "price", "rating", "reviews", "stock"
    ));
    for record in records {
        out.push_str(&format!(
            "{:>10}  {:<NAME_WIDTH$}  {:<BRAND_WIDTH$}  {:>10.2}  {:>6.1}  {:>8}  {:>7}\n",
            record.id,
            truncate(&record.name, NAME_WIDTH),
            truncate(&record.brand, BRAND_WIDTH),
            record.price,
            record.rating,
            record.reviews,
            record.stock,
        ));
    }
    out
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut truncated: String = value.chars().take(width.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(id: i64, name: &str) -> ProductRecord {
        ProductRecord {
            id,
            name: name.to_string(),
            brand: "BeautyNature".to_string(),
            price: 1250.0,
            rating: 4.8,
            reviews: 1890,
            stock: 450,
            params: BTreeMap::new(),
        }
    }

    #[test]
    fn renders_header_plus_one_line_per_record() {
        let out = render(&[record(1, "A"), record(2, "B")]);
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().next().unwrap().contains("reviews"));
    }

    #[test]
    fn rows_carry_record_values() {
        let out = render(&[record(12_345_678, "Hand cream")]);
        let row = out.lines().nth(1).unwrap();
        assert!(row.contains("12345678"));
        assert!(row.contains("Hand cream"));
        assert!(row.contains("1250.00"));
        assert!(row.contains("4.8"));
    }

    #[test]
    fn long_names_are_truncated() {
        let long = "x".repeat(80);
        let out = render(&[record(1, &long)]);
        let row = out.lines().nth(1).unwrap();
        assert!(row.contains('…'));
        assert!(!row.contains(&"x".repeat(41)));
    }
}
