//! Chart selection for a result set.
//!
//! One record gets a bar chart over its three headline numbers; several
//! records get a price-vs-rating scatter. The contract here is the selection
//! rule and the data handed to the renderer, not pixels — [`render`] is a
//! coarse terminal sketch of the same spec a graphical frontend would
//! consume.

use wbscan_core::ProductRecord;

/// Data for one chart, already shaped for a renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    /// Single-record analytics: one bar per category.
    Bar {
        label: String,
        categories: Vec<&'static str>,
        values: Vec<f64>,
    },
    /// Multi-record comparison: one point per record, price on x, rating on y.
    Scatter { points: Vec<(f64, f64)> },
}

/// Selects the chart for `records`: bar for exactly one record, scatter for
/// more, `None` for an empty set.
#[must_use]
pub fn chart_for(records: &[ProductRecord]) -> Option<ChartSpec> {
    match records {
        [] => None,
        [record] => Some(ChartSpec::Bar {
            label: record.name.clone(),
            categories: vec!["price", "reviews", "stock"],
            values: vec![
                record.price,
                f64::from(record.reviews),
                f64::from(record.stock),
            ],
        }),
        _ => Some(ChartSpec::Scatter {
            points: records.iter().map(|r| (r.price, r.rating)).collect(),
        }),
    }
}

/// Renders a chart spec as rough terminal output.
#[must_use]
pub fn render(spec: &ChartSpec) -> String {
    match spec {
        ChartSpec::Bar {
            label,
            categories,
            values,
        } => {
            let max = values.iter().copied().fold(0.0_f64, f64::max).max(1.0);
            let mut out = format!("{label}\n");
            for (category, value) in categories.iter().zip(values) {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let width = ((value / max) * 40.0).round() as usize;
                out.push_str(&format!(
                    "{category:>8} | {} {value:.2}\n",
                    "#".repeat(width.max(1))
                ));
            }
            out
        }
        ChartSpec::Scatter { points } => {
            let mut out = format!("price vs rating ({} products)\n", points.len());
            for (price, rating) in points {
                out.push_str(&format!("  {price:>10.2}  {rating:.1}\n"));
            }
            out
        }
    }
}
