//! Multi-valued grouping index.

use crate::index::traits::IndexSpec;
use crate::record::Record;
use std::collections::HashMap;
use std::sync::Arc;

/// Direct mapping from a normalized key to every record sharing it.
///
/// Groups keep insertion order, so a lookup returns records in the same
/// relative order as the catalog's master list.
pub struct GroupedIndex {
    /// Index specification.
    spec: IndexSpec,
    /// Key to records mapping.
    groups: HashMap<String, Vec<Arc<Record>>>,
    /// Total entry count.
    count: usize,
}

impl GroupedIndex {
    /// Creates a new, empty grouped index.
    pub fn new(spec: IndexSpec) -> Self {
        Self {
            spec,
            groups: HashMap::new(),
            count: 0,
        }
    }

    /// Returns the index specification.
    pub fn spec(&self) -> &IndexSpec {
        &self.spec
    }

    /// Appends a record to the group for its key.
    pub fn insert(&mut self, record: Arc<Record>) {
        let key = self.spec.key_of(&record);
        self.groups.entry(key).or_default().push(record);
        self.count += 1;
    }

    /// Returns every record whose key matches `query`.
    ///
    /// Unknown keys yield an empty slice.
    pub fn lookup(&self, query: &str) -> &[Arc<Record>] {
        let query = self.spec.normalize_query(query);
        self.groups
            .get(&*query)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.groups.len()
    }

    /// Returns the number of entries in the index.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
