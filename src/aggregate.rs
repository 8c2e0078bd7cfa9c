//! Review aggregation: raw review rows in, per-product summaries out.
//!
//! Supports:
//! - Per-record sentiment classification (rating only, no cross-row state)
//! - Group-by on the `(product_title, domain)` composite key
//! - Mean rating / mean sentiment score / sentiment distribution per product
//! - Skip-and-count policy for records with an absent or non-numeric rating

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::model::{ProductSummary, ReviewRecord, Sentiment};

/// Result of one aggregation pass.
#[derive(Debug, Clone)]
pub struct Aggregation {
    /// One summary per distinct `(product_title, domain)` key, sorted by that
    /// key. Consumers must not lean on this order for ranking; the assistant
    /// sorts by rating itself.
    pub summaries: Vec<ProductSummary>,
    /// Records dropped because their rating was absent or not a number.
    pub skipped: usize,
}

#[derive(Default)]
struct Accumulator {
    rating_sum: f64,
    sentiment_sum: f64,
    count: usize,
    positive: usize,
    neutral: usize,
    negative: usize,
}

impl Accumulator {
    fn push(&mut self, rating: f64) {
        let sentiment = Sentiment::from_rating(rating);
        self.rating_sum += rating;
        self.sentiment_sum += sentiment.score();
        self.count += 1;
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }
}

/// Fold a review table into per-product summaries.
///
/// Pure over its input: same records (in any order) produce summaries with
/// identical values. Empty input yields an empty summary list, not an error.
/// Records whose rating is `None` or NaN are skipped and counted in
/// [`Aggregation::skipped`]; everything else contributes to exactly one
/// summary row. Keys are matched exactly, case-sensitive, no trimming.
pub fn aggregate(records: &[ReviewRecord]) -> Aggregation {
    let mut groups: HashMap<(String, String), Accumulator> = HashMap::new();
    let mut skipped = 0usize;

    for record in records {
        let rating = match record.rating {
            Some(r) if !r.is_nan() => r,
            _ => {
                skipped += 1;
                continue;
            }
        };
        groups
            .entry((record.product_title.clone(), record.domain.clone()))
            .or_default()
            .push(rating);
    }

    if skipped > 0 {
        warn!(skipped, "dropped records with missing or non-numeric rating");
    }

    let mut summaries: Vec<ProductSummary> = groups
        .into_iter()
        .map(|((product_title, domain), acc)| ProductSummary {
            product_title,
            domain,
            avg_rating: acc.rating_sum / acc.count as f64,
            review_count: acc.count,
            avg_sentiment_score: acc.sentiment_sum / acc.count as f64,
            positive_reviews: acc.positive,
            neutral_reviews: acc.neutral,
            negative_reviews: acc.negative,
        })
        .collect();

    // HashMap iteration order is arbitrary; sort so repeated runs line up.
    summaries.sort_by(|a, b| {
        (a.product_title.as_str(), a.domain.as_str())
            .cmp(&(b.product_title.as_str(), b.domain.as_str()))
    });

    debug!(
        products = summaries.len(),
        reviews = records.len() - skipped,
        "aggregated review table"
    );

    Aggregation { summaries, skipped }
}
