//! Property-based test generators using proptest.
//!
//! The value spaces are kept small on purpose so generated catalogs contain
//! repeated titles, ISBNs and authors.

use libris_core::{Catalog, Field, Record};
use proptest::prelude::*;

/// Authors drawn by [`author_strategy`].
pub const AUTHORS: [&str; 5] = [
    "Bealu Girma",
    "Hadis Alemayehu",
    "Alemayehu Wase",
    "Yismake Worku",
    "Sebhat Gebre-Egziabher",
];

/// Strategy for generating upper-, lower- or original-case variants of `s`.
pub fn case_variant(s: String) -> impl Strategy<Value = String> {
    prop_oneof![
        Just(s.to_lowercase()),
        Just(s.to_uppercase()),
        Just(s),
    ]
}

/// Strategy for generating short mixed-case titles.
pub fn title_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][a-z]{0,5}( [A-Za-z][a-z]{0,5}){0,2}")
        .expect("Invalid regex")
}

/// Strategy for generating an author from [`AUTHORS`], in any case.
pub fn author_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(AUTHORS.to_vec()).prop_flat_map(|a| case_variant(a.to_string()))
}

/// Strategy for generating ISBN-like strings from a small space.
pub fn isbn_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("97[89][0-9]{2}[0-9X]").expect("Invalid regex")
}

/// Strategy for generating a record.
pub fn record_strategy() -> impl Strategy<Value = Record> {
    (title_strategy(), author_strategy(), isbn_strategy()).prop_map(|(title, author, isbn)| {
        let path = format!("books/{isbn}.pdf");
        Record::new(title, author, isbn, path)
    })
}

/// Strategy for generating a batch of records.
pub fn records_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_strategy(), min..max)
}

/// Strategy for generating a catalog seeded with generated records.
///
/// The records are returned alongside the catalog, in insertion order, so
/// tests can compare results against a simple model.
pub fn catalog_strategy(max: usize) -> impl Strategy<Value = (Catalog, Vec<Record>)> {
    records_strategy(0, max).prop_map(|records| (Catalog::new(records.clone()), records))
}

/// Strategy for generating a searchable field.
pub fn field_strategy() -> impl Strategy<Value = Field> {
    prop::sample::select(Field::ALL.to_vec())
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn isbn_has_six_chars(isbn in isbn_strategy()) {
            prop_assert_eq!(isbn.len(), 6);
            prop_assert!(isbn.starts_with("97"));
        }

        #[test]
        fn author_is_known_ignoring_case(author in author_strategy()) {
            let known = AUTHORS.iter().any(|a| a.to_lowercase() == author.to_lowercase());
            prop_assert!(known);
        }

        #[test]
        fn catalog_holds_its_records((catalog, records) in catalog_strategy(16)) {
            prop_assert_eq!(catalog.len(), records.len());
        }

        #[test]
        fn title_is_not_empty(title in title_strategy()) {
            prop_assert!(!title.is_empty());
        }
    }
}
