//! Append-only history of searches.
//!
//! The catalog writes one entry per accepted search. Entries are never
//! mutated or removed; the log lives as long as the catalog that owns it.

use crate::types::{Field, Requester};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;

/// A single recorded search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryLogEntry {
    /// Who searched.
    pub requester: Requester,
    /// The raw query text, as submitted.
    pub query_text: String,
    /// Field that was searched.
    pub field: Field,
    /// When the search was performed.
    pub timestamp: DateTime<Utc>,
}

impl QueryLogEntry {
    /// Creates an entry stamped with the current time.
    pub fn now(requester: Requester, query_text: impl Into<String>, field: Field) -> Self {
        Self {
            requester,
            query_text: query_text.into(),
            field,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only query log.
///
/// The log is thread-safe and preserves append order.
#[derive(Debug, Default)]
pub struct QueryLog {
    entries: RwLock<Vec<QueryLogEntry>>,
}

impl QueryLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn append(&self, entry: QueryLogEntry) {
        self.entries.write().push(entry);
    }

    /// Returns a snapshot of every entry in append order.
    pub fn entries(&self) -> Vec<QueryLogEntry> {
        self.entries.read().clone()
    }

    /// Returns the entries submitted by one requester, in append order.
    pub fn for_requester(&self, requester_id: &str) -> Vec<QueryLogEntry> {
        self.entries
            .read()
            .iter()
            .filter(|e| e.requester.id == requester_id)
            .cloned()
            .collect()
    }

    /// Returns how many searches targeted `field`.
    pub fn count_by_field(&self, field: Field) -> usize {
        self.entries
            .read()
            .iter()
            .filter(|e| e.field == field)
            .count()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
