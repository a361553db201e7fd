//! Thread-safe catalog handle.

use crate::catalog::Catalog;
use crate::comparison::SearchComparison;
use crate::error::CoreResult;
use crate::query_log::QueryLogEntry;
use crate::record::Record;
use crate::stats::StatsSnapshot;
use crate::types::{Field, Requester};
use parking_lot::RwLock;
use std::sync::Arc;

/// A cloneable, lock-protected [`Catalog`] for concurrent callers.
///
/// Insertions take the write lock, so no reader can observe a record that is
/// present in some indexes but not others. Searches take the read lock and
/// may run in parallel; the query log and counters synchronize internally.
#[derive(Debug, Clone)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    /// Wraps a catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Stores a record. See [`Catalog::add_record`].
    pub fn add_record(
        &self,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        content_reference: impl Into<String>,
    ) -> Arc<Record> {
        self.inner
            .write()
            .add_record(title, author, isbn, content_reference)
    }

    /// Searches the catalog. See [`Catalog::search`].
    pub fn search(
        &self,
        field: Field,
        query_text: &str,
        requester: &Requester,
    ) -> CoreResult<SearchComparison> {
        self.inner.read().search(field, query_text, requester)
    }

    /// Returns every logged search, in order.
    pub fn query_log(&self) -> Vec<QueryLogEntry> {
        self.inner.read().query_log()
    }

    /// Returns the searches submitted by one requester.
    pub fn history_for(&self, requester_id: &str) -> Vec<QueryLogEntry> {
        self.inner.read().history_for(requester_id)
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns true if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns a snapshot of the catalog counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.inner.read().stats().snapshot()
    }

    /// Runs `f` with shared access to the catalog.
    pub fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}
