//! Review-table loading: the one piece of I/O in the system.
//!
//! Supports:
//! - CSV input with `product_title`, `domain`, `rating` columns (extra
//!   columns pass through unread)
//! - Lenient rating parsing: a blank or non-numeric rating cell yields
//!   `rating: None` and is left for the aggregator's skip policy
//! - Dropping rows that are structurally broken (missing title/domain),
//!   counted and warned about rather than failing the whole load
//! - [`CachedLoader`], an explicitly scoped cache keyed by the file's
//!   modification time, so unchanged files are not re-read

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::Error;
use crate::model::ReviewRecord;

/// Result of one file read.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub records: Vec<ReviewRecord>,
    /// Rows dropped because they could not be decoded at all. A bad rating
    /// cell does not count here; those rows are kept with `rating: None`.
    pub malformed_rows: usize,
}

/// Raw CSV row. `rating` stays a string so a junk cell does not abort the
/// whole deserialization; it is parsed into a number afterwards.
#[derive(Debug, Deserialize)]
struct RawRow {
    product_title: String,
    domain: String,
    #[serde(default)]
    rating: String,
}

impl From<RawRow> for ReviewRecord {
    fn from(row: RawRow) -> Self {
        ReviewRecord {
            product_title: row.product_title,
            domain: row.domain,
            rating: row.rating.trim().parse::<f64>().ok(),
        }
    }
}

/// Read the review table from a CSV file.
///
/// Fails only when the file itself cannot be opened or read; per-row
/// anomalies are handled inline (see [`LoadReport`]).
pub fn load_reviews(path: impl AsRef<Path>) -> Result<LoadReport, Error> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut records = Vec::new();
    let mut malformed_rows = 0usize;
    for row in reader.deserialize::<RawRow>() {
        match row {
            Ok(raw) => records.push(ReviewRecord::from(raw)),
            Err(e) => {
                malformed_rows += 1;
                warn!(path = %path.display(), "dropping malformed row: {e}");
            }
        }
    }

    info!(
        path = %path.display(),
        rows = records.len(),
        malformed_rows,
        "loaded review table"
    );
    Ok(LoadReport {
        records,
        malformed_rows,
    })
}

/// Mtime-keyed cache around [`load_reviews`].
///
/// Owned by whoever drives the dashboard, not process-global. `load` re-reads
/// the file only when its modification time differs from the cached one; the
/// cached result is otherwise returned as-is.
pub struct CachedLoader {
    path: PathBuf,
    cached: Option<(SystemTime, LoadReport)>,
}

impl CachedLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&mut self) -> Result<&LoadReport, Error> {
        let mtime = std::fs::metadata(&self.path)?.modified()?;
        let stale = match &self.cached {
            Some((cached_mtime, _)) => *cached_mtime != mtime,
            None => true,
        };
        if stale {
            let report = load_reviews(&self.path)?;
            self.cached = Some((mtime, report));
        }
        // Unwrap is fine: the branch above guarantees a cached value.
        Ok(&self.cached.as_ref().unwrap().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("review_intel_{}_{}", std::process::id(), name));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_basic_table() {
        let path = write_temp_csv(
            "basic.csv",
            "product_title,domain,rating\nAtomic Habits,Books,5\nGalaxy S24,Electronics,4.5\n",
        );
        let report = load_reviews(&path).unwrap();
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.malformed_rows, 0);
        assert_eq!(report.records[0].product_title, "Atomic Habits");
        assert_eq!(report.records[0].rating, Some(5.0));
        assert_eq!(report.records[1].rating, Some(4.5));
    }

    #[test]
    fn test_bad_rating_cell_becomes_none() {
        let path = write_temp_csv(
            "bad_rating.csv",
            "product_title,domain,rating\nA,Books,five\nB,Books,\nC,Books,3\n",
        );
        let report = load_reviews(&path).unwrap();
        assert_eq!(report.records.len(), 3);
        assert_eq!(report.malformed_rows, 0);
        assert_eq!(report.records[0].rating, None);
        assert_eq!(report.records[1].rating, None);
        assert_eq!(report.records[2].rating, Some(3.0));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let path = write_temp_csv(
            "extra_cols.csv",
            "product_title,domain,rating,review_text\nA,Books,4,great read\n",
        );
        let report = load_reviews(&path).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].rating, Some(4.0));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_reviews("/definitely/not/here.csv").is_err());
    }

    #[test]
    fn test_cached_loader_reuses_until_mtime_changes() {
        let path = write_temp_csv(
            "cached.csv",
            "product_title,domain,rating\nA,Books,4\n",
        );
        let mut loader = CachedLoader::new(&path);
        assert_eq!(loader.load().unwrap().records.len(), 1);

        // Rewrite the file but pin the old mtime: the cache must hold.
        let old_mtime = std::fs::metadata(&path).unwrap().modified().unwrap();
        std::fs::write(
            &path,
            "product_title,domain,rating\nA,Books,4\nB,Books,2\n",
        )
        .unwrap();
        File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(old_mtime)
            .unwrap();
        assert_eq!(loader.load().unwrap().records.len(), 1);

        // Bump the mtime: the next load must see the new row.
        File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(old_mtime + std::time::Duration::from_secs(5))
            .unwrap();
        assert_eq!(loader.load().unwrap().records.len(), 2);
    }
}
