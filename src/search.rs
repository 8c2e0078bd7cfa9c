//! Catalog search for the dashboard's browse view: a free-text title search
//! combined with an optional category dropdown. Both are plain filters over
//! the aggregated table; no ranking happens here.

use crate::model::ProductSummary;

/// Filter summaries by title substring (case-insensitive) and exact domain.
///
/// An empty query matches every title; `domain: None` means "All". Input
/// order is preserved.
pub fn filter_products<'a>(
    summaries: &'a [ProductSummary],
    query: &str,
    domain: Option<&str>,
) -> Vec<&'a ProductSummary> {
    let needle = query.to_lowercase();
    summaries
        .iter()
        .filter(|s| domain.map_or(true, |d| s.domain == d))
        .filter(|s| needle.is_empty() || s.product_title.to_lowercase().contains(&needle))
        .collect()
}
