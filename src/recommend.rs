//! Rule-based recommendation assistant.
//!
//! This is not a conversational agent: a free-text query is routed to a
//! product category by a fixed, ordered keyword table, and the answer is the
//! highest-rated product in that category. Matching is case-insensitive
//! substring containment, not whole-word ("bookshelf" hits the Books rule);
//! that looseness is intentional and must stay.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::Error;
use crate::model::ProductSummary;

/// One routing rule: if the query contains any keyword, it belongs to
/// `domain`.
struct CategoryRule {
    keywords: &'static [&'static str],
    domain: &'static str,
}

/// Ordered rule table, evaluated top to bottom, first match wins.
static CATEGORY_RULES: Lazy<Vec<CategoryRule>> = Lazy::new(|| {
    vec![
        CategoryRule {
            keywords: &["phone", "mobile"],
            domain: "Electronics",
        },
        CategoryRule {
            keywords: &["book"],
            domain: "Books",
        },
        CategoryRule {
            keywords: &["cloth", "shirt", "dress"],
            domain: "Clothing",
        },
    ]
});

/// Map a query to a category, or `None` when no rule matches (meaning: rank
/// across all domains).
pub fn infer_category(query: &str) -> Option<&'static str> {
    let q = query.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| q.contains(kw)))
        .map(|rule| rule.domain)
}

/// Answer one assistant query against an aggregated summary table.
///
/// The subset is the summaries whose `domain` equals the inferred category
/// (all summaries when no rule matched). The winner is the subset's maximum
/// `avg_rating`; exact ties go to the lexicographically smaller
/// `product_title`, then `domain`, so the answer never depends on input
/// order. An empty subset is [`Error::NoMatch`], never a panic.
pub fn recommend<'a>(
    query: &str,
    summaries: &'a [ProductSummary],
) -> Result<&'a ProductSummary, Error> {
    let category = infer_category(query);
    debug!(?category, query, "routing assistant query");

    let candidates = summaries
        .iter()
        .filter(|s| category.map_or(true, |c| s.domain == c));

    candidates
        .max_by(|a, b| {
            a.avg_rating
                .partial_cmp(&b.avg_rating)
                .unwrap_or(std::cmp::Ordering::Equal)
                // max_by keeps the last of equal elements, so order the
                // preferred (smaller-title) row as the greater one.
                .then_with(|| {
                    (b.product_title.as_str(), b.domain.as_str())
                        .cmp(&(a.product_title.as_str(), a.domain.as_str()))
                })
        })
        .ok_or_else(|| Error::NoMatch {
            category: category.map(str::to_owned),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(title: &str, domain: &str, avg_rating: f64) -> ProductSummary {
        ProductSummary {
            product_title: title.to_string(),
            domain: domain.to_string(),
            avg_rating,
            review_count: 1,
            avg_sentiment_score: 0.0,
            positive_reviews: 0,
            neutral_reviews: 1,
            negative_reviews: 0,
        }
    }

    #[test]
    fn test_category_inference() {
        assert_eq!(infer_category("best phone"), Some("Electronics"));
        assert_eq!(infer_category("cheap MOBILE"), Some("Electronics"));
        assert_eq!(infer_category("good book for mindset"), Some("Books"));
        assert_eq!(infer_category("comfortable clothing"), Some("Clothing"));
        assert_eq!(infer_category("a nice shirt"), Some("Clothing"));
        assert_eq!(infer_category("summer dress"), Some("Clothing"));
        assert_eq!(infer_category("anything else"), None);
        assert_eq!(infer_category(""), None);
    }

    #[test]
    fn test_substring_not_whole_word() {
        // Deliberate looseness: containment, not word boundaries.
        assert_eq!(infer_category("bookshelf"), Some("Books"));
        assert_eq!(infer_category("tablecloth"), Some("Clothing"));
    }

    #[test]
    fn test_rule_order_first_match_wins() {
        // "phone book" hits the Electronics rule before the Books rule.
        assert_eq!(infer_category("phone book"), Some("Electronics"));
    }

    #[test]
    fn test_best_in_category() {
        let summaries = vec![
            summary("X", "Books", 4.5),
            summary("Y", "Books", 3.0),
            summary("Z", "Electronics", 5.0),
        ];
        let best = recommend("good book", &summaries).unwrap();
        assert_eq!(best.product_title, "X");
        assert_eq!(best.domain, "Books");
    }

    #[test]
    fn test_result_never_leaves_inferred_category() {
        let summaries = vec![
            summary("TopPhone", "Electronics", 3.0),
            summary("TopBook", "Books", 5.0),
        ];
        let best = recommend("any phone", &summaries).unwrap();
        assert_eq!(best.domain, "Electronics");
    }

    #[test]
    fn test_empty_query_ranks_across_all_domains() {
        let summaries = vec![
            summary("A", "Books", 4.0),
            summary("B", "Electronics", 4.9),
            summary("C", "Clothing", 2.0),
        ];
        let best = recommend("", &summaries).unwrap();
        assert_eq!(best.product_title, "B");
    }

    #[test]
    fn test_no_match_in_category() {
        let summaries = vec![summary("A", "Books", 4.0), summary("C", "Clothing", 2.0)];
        match recommend("best phone", &summaries) {
            Err(Error::NoMatch { category }) => {
                assert_eq!(category.as_deref(), Some("Electronics"))
            }
            other => panic!("expected NoMatch, got {:?}", other.map(|s| s.clone())),
        }
    }

    #[test]
    fn test_empty_summaries() {
        match recommend("", &[]) {
            Err(Error::NoMatch { category }) => assert!(category.is_none()),
            other => panic!("expected NoMatch, got {:?}", other.map(|s| s.clone())),
        }
    }

    #[test]
    fn test_deterministic_tie_break() {
        let mut summaries = vec![
            summary("Beta", "Books", 4.5),
            summary("Alpha", "Books", 4.5),
        ];
        let best = recommend("book", &summaries).unwrap();
        assert_eq!(best.product_title, "Alpha");

        summaries.reverse();
        let best = recommend("book", &summaries).unwrap();
        assert_eq!(best.product_title, "Alpha");
    }
}
