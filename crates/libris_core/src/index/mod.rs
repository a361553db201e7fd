//! Index implementations for access paths.
//!
//! Every index is parameterized by an [`IndexSpec`] that names the field,
//! the key extraction function and the normalization rule. The catalog
//! keeps several indexes over the same records and compares them.
//!
//! # Index Types
//!
//! - [`TreeIndex`]: unbalanced binary search tree, O(height) lookup
//! - [`HashIndex`]: fixed-bucket chained hash table, O(1) expected lookup
//! - [`GroupedIndex`]: key to all matching records, O(1) expected lookup

mod grouped;
mod hash;
mod traits;
mod tree;

pub use grouped::GroupedIndex;
pub use hash::{HashIndex, DEFAULT_BUCKET_COUNT};
pub use traits::{Index, IndexSpec, KeyExtractor, KeyRule};
pub use tree::TreeIndex;
