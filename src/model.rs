//! Core data types for the review-analytics pipeline.
//!
//! A raw review table is a flat list of [`ReviewRecord`]s. The aggregator
//! folds those into one [`ProductSummary`] per `(product_title, domain)` key.
//! Sentiment is a pure function of the numeric rating, nothing else.

use serde::{Deserialize, Serialize};

/// One row of the raw input table. Many records share a `product_title`;
/// the identifying key is the `(product_title, domain)` pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub product_title: String,
    /// Category label (e.g. "Books", "Electronics", "Clothing"). Treated as
    /// an opaque string, not a closed enum, since new domains show up in data.
    pub domain: String,
    /// Star rating, expected 1-5 but never enforced. `None` means the source
    /// cell was absent or non-numeric; the aggregator decides what to do with
    /// those.
    pub rating: Option<f64>,
}

impl ReviewRecord {
    pub fn new(product_title: impl Into<String>, domain: impl Into<String>, rating: f64) -> Self {
        Self {
            product_title: product_title.into(),
            domain: domain.into(),
            rating: Some(rating),
        }
    }
}

/// Sentiment class of a single review, derived solely from its rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Positive if rating >= 4, Neutral if rating == 3, Negative otherwise.
    /// The thresholds are fixed constants; they never vary by domain.
    /// Fractional ratings like 3.5 fall through to Negative, as do
    /// out-of-range values.
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 4.0 {
            Sentiment::Positive
        } else if rating == 3.0 {
            Sentiment::Neutral
        } else {
            Sentiment::Negative
        }
    }

    /// Numeric encoding used for averaging: +1 / 0 / -1.
    pub fn score(self) -> f64 {
        match self {
            Sentiment::Positive => 1.0,
            Sentiment::Neutral => 0.0,
            Sentiment::Negative => -1.0,
        }
    }
}

/// Coarse buy/avoid/reconsider verdict for a product, derived from its
/// average rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationTier {
    MustBuy,
    ThinkAgain,
    Avoid,
}

impl RecommendationTier {
    /// MustBuy if avg >= 4, Avoid if avg < 3, ThinkAgain in between.
    pub fn from_avg_rating(avg_rating: f64) -> Self {
        if avg_rating >= 4.0 {
            RecommendationTier::MustBuy
        } else if avg_rating < 3.0 {
            RecommendationTier::Avoid
        } else {
            RecommendationTier::ThinkAgain
        }
    }

    /// Badge text as the dashboard shows it.
    pub fn label(self) -> &'static str {
        match self {
            RecommendationTier::MustBuy => "Must Buy",
            RecommendationTier::ThinkAgain => "Think Again",
            RecommendationTier::Avoid => "Avoid",
        }
    }
}

/// Aggregated metrics for one `(product_title, domain)` key.
///
/// `avg_sentiment_score` is always the arithmetic mean of the per-review
/// sentiment scores; it is never recomputed from `avg_rating`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSummary {
    pub product_title: String,
    pub domain: String,
    pub avg_rating: f64,
    pub review_count: usize,
    /// Mean of per-review sentiment scores, in [-1, +1].
    pub avg_sentiment_score: f64,
    pub positive_reviews: usize,
    pub neutral_reviews: usize,
    pub negative_reviews: usize,
}

impl ProductSummary {
    /// Value for a 0-1 progress meter: `(avg_sentiment_score + 1) / 2`.
    pub fn meter_value(&self) -> f64 {
        (self.avg_sentiment_score + 1.0) / 2.0
    }

    /// Recommendation badge, derived on demand from the average rating.
    pub fn tier(&self) -> RecommendationTier {
        RecommendationTier::from_avg_rating(self.avg_rating)
    }
}
