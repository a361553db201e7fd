//! Catalog statistics.
//!
//! Counters are atomic so they can be updated from `&self` search paths and
//! read while other operations are in progress.
//!
//! # Usage
//!
//! ```rust,ignore
//! let catalog = Catalog::with_samples();
//! catalog.search(Field::Title, "oromay", &requester)?;
//!
//! let stats = catalog.stats().snapshot();
//! println!("Searches: {}", stats.searches);
//! ```

use crate::types::Field;
use std::sync::atomic::{AtomicU64, Ordering};

/// Catalog statistics and metrics.
///
/// Values are monotonically increasing.
#[derive(Debug, Default)]
pub struct CatalogStats {
    /// Records added through the catalog.
    records_added: AtomicU64,
    /// Accepted searches, all fields.
    searches: AtomicU64,
    /// Accepted title searches.
    title_searches: AtomicU64,
    /// Accepted ISBN searches.
    isbn_searches: AtomicU64,
    /// Accepted author searches.
    author_searches: AtomicU64,
    /// Searches rejected before running.
    rejected_queries: AtomicU64,
    /// Searches where strategies disagreed.
    inconsistencies: AtomicU64,
}

impl CatalogStats {
    /// Creates a new stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    // === Increment methods (internal use) ===

    pub(crate) fn record_add(&self) {
        self.records_added.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_search(&self, field: Field) {
        self.searches.fetch_add(1, Ordering::Relaxed);
        let counter = match field {
            Field::Title => &self.title_searches,
            Field::Isbn => &self.isbn_searches,
            Field::Author => &self.author_searches,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_rejected(&self) {
        self.rejected_queries.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_inconsistency(&self) {
        self.inconsistencies.fetch_add(1, Ordering::Relaxed);
    }

    // === Getter methods (public API) ===

    /// Returns the number of records added.
    pub fn records_added(&self) -> u64 {
        self.records_added.load(Ordering::Relaxed)
    }

    /// Returns the number of accepted searches.
    pub fn searches(&self) -> u64 {
        self.searches.load(Ordering::Relaxed)
    }

    /// Returns the number of accepted searches on one field.
    pub fn searches_on(&self, field: Field) -> u64 {
        match field {
            Field::Title => self.title_searches.load(Ordering::Relaxed),
            Field::Isbn => self.isbn_searches.load(Ordering::Relaxed),
            Field::Author => self.author_searches.load(Ordering::Relaxed),
        }
    }

    /// Returns the number of rejected searches.
    pub fn rejected_queries(&self) -> u64 {
        self.rejected_queries.load(Ordering::Relaxed)
    }

    /// Returns the number of detected strategy disagreements.
    ///
    /// Anything other than zero indicates a bug in an index.
    pub fn inconsistencies(&self) -> u64 {
        self.inconsistencies.load(Ordering::Relaxed)
    }

    /// Returns a snapshot of all stats.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            records_added: self.records_added(),
            searches: self.searches(),
            title_searches: self.searches_on(Field::Title),
            isbn_searches: self.searches_on(Field::Isbn),
            author_searches: self.searches_on(Field::Author),
            rejected_queries: self.rejected_queries(),
            inconsistencies: self.inconsistencies(),
        }
    }
}

/// A point-in-time snapshot of catalog statistics.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct StatsSnapshot {
    /// Records added.
    pub records_added: u64,
    /// Accepted searches.
    pub searches: u64,
    /// Accepted title searches.
    pub title_searches: u64,
    /// Accepted ISBN searches.
    pub isbn_searches: u64,
    /// Accepted author searches.
    pub author_searches: u64,
    /// Rejected searches.
    pub rejected_queries: u64,
    /// Detected strategy disagreements.
    pub inconsistencies: u64,
}
