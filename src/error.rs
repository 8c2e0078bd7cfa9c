//! Crate error type.
//!
//! The core never panics on bad input: an empty review table is simply an
//! empty result, and an assistant query with no matching products comes back
//! as [`Error::NoMatch`] for the presentation layer to phrase.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The recommender's filtered subset was empty. `category` is the domain
    /// the query was routed to, or `None` when the query matched no rule and
    /// the whole (empty) table was considered.
    #[error("no products found{}", .category.as_ref().map(|c| format!(" in category {c}")).unwrap_or_default())]
    NoMatch { category: Option<String> },

    #[error("failed to read review table: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse review table: {0}")]
    Csv(#[from] csv::Error),
}
