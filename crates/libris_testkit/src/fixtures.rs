//! Catalog fixtures and helpers.
//!
//! Provides convenience functions for setting up catalogs and common test
//! scenarios.

use libris_core::{Catalog, CatalogConfig, Record, Requester, SharedCatalog};

/// The requester used by most tests.
pub fn tester() -> Requester {
    Requester::new("u1", "Test")
}

/// A requester with the given ID.
pub fn requester(id: &str) -> Requester {
    Requester::new(id, format!("User {id}"))
}

/// Builds a record with a placeholder content reference.
pub fn record(title: &str, author: &str, isbn: &str) -> Record {
    Record::new(title, author, isbn, format!("books/{isbn}.pdf"))
}

/// A catalog seeded with the built-in sample books.
pub fn sample_catalog() -> Catalog {
    Catalog::with_samples()
}

/// A shared catalog seeded with the built-in sample books.
pub fn shared_sample_catalog() -> SharedCatalog {
    SharedCatalog::new(Catalog::with_samples())
}

/// A catalog holding exactly `records`.
pub fn catalog_from(records: impl IntoIterator<Item = Record>) -> Catalog {
    Catalog::new(records)
}

/// A catalog whose hash indexes have a single bucket, so every key collides.
pub fn colliding_catalog(records: impl IntoIterator<Item = Record>) -> Catalog {
    Catalog::with_config(CatalogConfig::new().bucket_count(1), records)
        .expect("one bucket is a valid configuration")
}

/// Test scenario helpers.
pub mod scenarios {
    use super::*;

    pub use libris_core::synthetic_records;

    /// A catalog built from sorted input, so both trees degenerate into
    /// chains of height `count`.
    pub fn sorted_catalog(count: usize) -> Catalog {
        Catalog::new(synthetic_records(count, 10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libris_core::Field;

    #[test]
    fn sample_fixture() {
        assert_eq!(sample_catalog().len(), 3);
        assert_eq!(shared_sample_catalog().len(), 3);
    }

    #[test]
    fn sorted_catalog_is_degenerate() {
        let catalog = scenarios::sorted_catalog(50);
        assert_eq!(catalog.tree_height(Field::Isbn), Some(50));
        assert_eq!(catalog.tree_height(Field::Title), Some(50));
    }

    #[test]
    fn colliding_catalog_uses_one_chain() {
        let catalog = colliding_catalog(scenarios::synthetic_records(10, 2));
        assert_eq!(catalog.longest_bucket(Field::Title), Some(10));
    }
}
