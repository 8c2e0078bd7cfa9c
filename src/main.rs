//! Terminal front end for the review-analytics core. Loads the review table,
//! prints one card per product, then answers assistant queries from stdin.
//! All rendering lives here; the library never formats user-facing text.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use review_intel::{aggregate, filter_products, recommend, CachedLoader, Error, ProductSummary};

const DEFAULT_DATASET: &str = "final_product_dataset.csv";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATASET.to_string());

    let mut loader = CachedLoader::new(&path);
    let report = loader
        .load()
        .with_context(|| format!("could not load review table from {path}"))?;

    let result = aggregate(&report.records);
    println!("🛒 Review Intelligence Dashboard");
    println!(
        "   {} products from {} reviews ({} skipped)\n",
        result.summaries.len(),
        report.records.len() - result.skipped,
        result.skipped
    );

    for summary in &result.summaries {
        print_card(summary);
    }

    println!("🤖 Assistant ready. Ask e.g. \"best phone\" or \"good book\".");
    println!("   `/find <text>` searches titles, `/json` dumps the table, EOF quits.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(needle) = line.strip_prefix("/find ") {
            let hits = filter_products(&result.summaries, needle, None);
            if hits.is_empty() {
                println!("No products found.\n");
            } else {
                for hit in hits {
                    print_card(hit);
                }
            }
        } else if line == "/json" {
            println!("{}", serde_json::to_string_pretty(&result.summaries)?);
        } else {
            match recommend(line, &result.summaries) {
                Ok(best) => println!(
                    "✅ Recommended: {} ({}) — avg rating {:.2}\n",
                    best.product_title, best.domain, best.avg_rating
                ),
                Err(Error::NoMatch { category }) => match category {
                    Some(c) => println!("No matching products in {c}.\n"),
                    None => println!("No matching products.\n"),
                },
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

fn print_card(summary: &ProductSummary) {
    println!("📦 {} [{}]", summary.product_title, summary.domain);
    println!(
        "   ⭐ {:.2}  ·  {} reviews  ·  {}",
        summary.avg_rating,
        summary.review_count,
        summary.tier().label()
    );
    println!(
        "   🎛 sentiment meter {:.0}%  (+{} / ={} / -{})\n",
        summary.meter_value() * 100.0,
        summary.positive_reviews,
        summary.neutral_reviews,
        summary.negative_reviews
    );
}
