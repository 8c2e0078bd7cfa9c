//! Review-analytics core.
//!
//! Ingests a flat table of product reviews, derives per-product sentiment and
//! rating metrics, and answers rule-based recommendation queries. Two pure
//! entry points do the real work:
//!
//! - [`aggregate::aggregate`]: review rows in, one [`model::ProductSummary`]
//!   per `(product_title, domain)` out.
//! - [`recommend::recommend`]: free-text query + summaries in, best product
//!   in the inferred category out.
//!
//! Everything around them (CSV loading with an mtime cache, catalog search)
//! is thin plumbing; rendering is left entirely to the consumer.

pub mod aggregate;
pub mod error;
pub mod loader;
pub mod model;
pub mod recommend;
pub mod search;

pub use aggregate::{aggregate, Aggregation};
pub use error::Error;
pub use loader::{load_reviews, CachedLoader, LoadReport};
pub use model::{ProductSummary, RecommendationTier, ReviewRecord, Sentiment};
pub use recommend::{infer_category, recommend};
pub use search::filter_products;
