//! Catalog configuration.

use crate::error::{CoreError, CoreResult};
use crate::index::DEFAULT_BUCKET_COUNT;

/// Configuration for building a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Number of buckets in each hash index. Fixed for the catalog's lifetime.
    pub bucket_count: usize,

    /// Whether searches check that competing strategies agree.
    pub verify_agreement: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            verify_agreement: true,
        }
    }
}

impl CatalogConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hash index bucket count.
    #[must_use]
    pub const fn bucket_count(mut self, count: usize) -> Self {
        self.bucket_count = count;
        self
    }

    /// Sets whether searches verify cross-strategy agreement.
    #[must_use]
    pub const fn verify_agreement(mut self, value: bool) -> Self {
        self.verify_agreement = value;
        self
    }

    /// Checks that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the bucket count is zero.
    pub fn validate(&self) -> CoreResult<()> {
        if self.bucket_count == 0 {
            return Err(CoreError::invalid_config("bucket_count must be at least 1"));
        }
        Ok(())
    }
}
