//! CSV export of a result set.
//!
//! Fixed leading columns for the seven scalar fields, then one column per
//! distinct key in the union of all records' `params`, sorted by name. A
//! record missing a key gets an empty cell, never an omitted column, so
//! every row has the same width.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use wbscan_core::ProductRecord;

const FIXED_COLUMNS: [&str; 7] = ["id", "name", "brand", "price", "rating", "reviews", "stock"];

/// Default export filename, timestamped so repeated exports don't clobber
/// each other: `wb_export_20260806_141502.csv`.
#[must_use]
pub fn default_export_path() -> PathBuf {
    PathBuf::from(format!(
        "wb_export_{}.csv",
        Utc::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Writes `records` as CSV to `path`.
///
/// # Errors
///
/// Fails when `records` is empty (nothing to export is reported, not
/// silently written as a header-only file), or on file/serialization errors.
pub fn write_csv_file(records: &[ProductRecord], path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create export file {}", path.display()))?;
    write_csv(records, file)
}

/// Writes `records` as CSV to any writer. Split out from the file wrapper so
/// tests can export into a buffer.
///
/// # Errors
///
/// Fails when `records` is empty or on serialization errors.
pub fn write_csv<W: Write>(records: &[ProductRecord], writer: W) -> anyhow::Result<()> {
    anyhow::ensure!(!records.is_empty(), "nothing to export");

    let param_keys = ProductRecord::union_param_keys(records);
    let mut csv_writer = csv::Writer::from_writer(writer);

    let header: Vec<&str> = FIXED_COLUMNS
        .iter()
        .copied()
        .chain(param_keys.iter().map(String::as_str))
        .collect();
    csv_writer.write_record(&header)?;

    for record in records {
        let mut row: Vec<String> = vec![
            record.id.to_string(),
            record.name.clone(),
            record.brand.clone(),
            format!("{:.2}", record.price),
            record.rating.to_string(),
            record.reviews.to_string(),
            record.stock.to_string(),
        ];
        for key in &param_keys {
            row.push(record.params.get(key).cloned().unwrap_or_default());
        }
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(id: i64, params: &[(&str, &str)]) -> ProductRecord {
        ProductRecord {
            id,
            name: format!("Product {id}"),
            brand: "Brand".to_string(),
            price: 1250.0,
            rating: 4.8,
            reviews: 1890,
            stock: 450,
            params: params
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    fn export_to_string(records: &[ProductRecord]) -> String {
        let mut buffer = Vec::new();
        write_csv(records, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn header_is_fixed_columns_plus_sorted_param_union() {
        let records = vec![
            record(1, &[("Volume", "50 ml")]),
            record(2, &[("Active", "vitamin C"), ("Volume", "30 ml")]),
        ];
        let out = export_to_string(&records);
        assert_eq!(
            out.lines().next().unwrap(),
            "id,name,brand,price,rating,reviews,stock,Active,Volume"
        );
    }

    #[test]
    fn missing_param_key_becomes_empty_cell() {
        let records = vec![
            record(1, &[("Volume", "50 ml")]),
            record(2, &[("Active", "vitamin C")]),
        ];
        let out = export_to_string(&records);
        let mut lines = out.lines().skip(1);
        // Columns after stock: Active, Volume.
        assert!(lines.next().unwrap().ends_with(",450,,50 ml"));
        assert!(lines.next().unwrap().ends_with(",450,vitamin C,"));
    }

    #[test]
    fn one_row_per_record_without_params() {
        let records = vec![record(1, &[]), record(2, &[]), record(3, &[])];
        let out = export_to_string(&records);
        assert_eq!(out.lines().count(), 4);
        assert_eq!(
            out.lines().next().unwrap(),
            "id,name,brand,price,rating,reviews,stock"
        );
    }

    #[test]
    fn empty_result_set_is_rejected() {
        let mut buffer = Vec::new();
        let result = write_csv(&[], &mut buffer);
        assert!(result.is_err());
        assert!(buffer.is_empty(), "no header-only file on empty export");
    }

    #[test]
    fn default_export_path_is_timestamped_csv() {
        let path = default_export_path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("wb_export_"));
        assert!(name.ends_with(".csv"));
    }

    #[test]
    fn record_params_never_shift_fixed_columns() {
        let records = vec![record(7, &[("Volume", "50 ml")])];
        let out = export_to_string(&records);
        let row = out.lines().nth(1).unwrap();
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields[0], "7");
        assert_eq!(fields[3], "1250.00");
        assert_eq!(fields[7], "50 ml");
    }
}
