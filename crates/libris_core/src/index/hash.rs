//! Chained hash table index.

use crate::error::{CoreError, CoreResult};
use crate::index::traits::{Index, IndexSpec};
use crate::record::Record;
use crate::types::Strategy;
use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;
use std::sync::Arc;

/// Default number of buckets.
pub const DEFAULT_BUCKET_COUNT: usize = 100;

/// Fixed-size hash table for O(1)-expected exact lookups.
///
/// Each bucket holds an insertion-ordered chain of `(key, record)` pairs.
/// A record lives in bucket `hash(key) % bucket_count`, where the hasher is
/// fixed when the index is built. There is no resizing and no duplicate
/// check; a search returns the first matching entry in its chain.
///
/// # Example
///
/// ```rust,ignore
/// let mut index = HashIndex::new(IndexSpec::for_field(Field::Isbn));
/// index.insert(Arc::new(record));
///
/// let hit = index.search("9785678");
/// ```
pub struct HashIndex<S = RandomState> {
    /// Index specification.
    spec: IndexSpec,
    /// Bucket chains.
    buckets: Vec<Vec<(String, Arc<Record>)>>,
    /// Hasher shared by insert and search.
    hasher: S,
    /// Total entry count.
    count: usize,
}

impl HashIndex<RandomState> {
    /// Creates a new hash index with the default bucket count.
    pub fn new(spec: IndexSpec) -> Self {
        Self::from_parts(spec, DEFAULT_BUCKET_COUNT, RandomState::new())
    }

    /// Creates a new hash index with `bucket_count` buckets.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `bucket_count` is zero.
    pub fn with_buckets(spec: IndexSpec, bucket_count: usize) -> CoreResult<Self> {
        Self::with_hasher(spec, bucket_count, RandomState::new())
    }

    /// Creates a hash index, clamping `bucket_count` to at least one.
    pub(crate) fn sized(spec: IndexSpec, bucket_count: usize) -> Self {
        Self::from_parts(spec, bucket_count.max(1), RandomState::new())
    }
}

impl<S: BuildHasher> HashIndex<S> {
    /// Creates a new hash index using a specific hasher.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `bucket_count` is zero.
    pub fn with_hasher(spec: IndexSpec, bucket_count: usize, hasher: S) -> CoreResult<Self> {
        if bucket_count == 0 {
            return Err(CoreError::invalid_config(format!(
                "index {} needs at least one bucket",
                spec.name
            )));
        }
        Ok(Self::from_parts(spec, bucket_count, hasher))
    }

    fn from_parts(spec: IndexSpec, bucket_count: usize, hasher: S) -> Self {
        Self {
            spec,
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
            hasher,
            count: 0,
        }
    }

    fn bucket_of(&self, key: &str) -> usize {
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Returns the number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the length of the longest chain.
    pub fn longest_bucket(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl<S: BuildHasher + Send + Sync> Index for HashIndex<S> {
    fn spec(&self) -> &IndexSpec {
        &self.spec
    }

    fn strategy(&self) -> Strategy {
        Strategy::Hash
    }

    fn insert(&mut self, record: Arc<Record>) {
        let key = self.spec.key_of(&record);
        let bucket = self.bucket_of(&key);
        self.buckets[bucket].push((key, record));
        self.count += 1;
    }

    fn search(&self, query: &str) -> Option<Arc<Record>> {
        let query = self.spec.normalize_query(query);
        let bucket = self.bucket_of(&query);
        self.buckets[bucket]
            .iter()
            .find(|(key, _)| *key == *query)
            .map(|(_, record)| Arc::clone(record))
    }

    fn len(&self) -> usize {
        self.count
    }
}
