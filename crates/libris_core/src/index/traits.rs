//! Index traits and key rules.

use crate::record::Record;
use crate::types::{Field, Strategy};
use std::borrow::Cow;
use std::sync::Arc;

/// How keys are normalized before they are compared.
///
/// The same rule is applied to keys at insertion and to queries at search
/// time. Using different rules on the two sides makes lookups miss silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRule {
    /// Lower-case the key (Unicode-aware) and compare exactly.
    CaseFold,
    /// Compare the raw string exactly.
    Exact,
}

impl KeyRule {
    /// Normalizes a key or query under this rule.
    pub fn normalize<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        match self {
            KeyRule::CaseFold => Cow::Owned(raw.to_lowercase()),
            KeyRule::Exact => Cow::Borrowed(raw),
        }
    }
}

/// Extracts the raw key of a record.
pub type KeyExtractor = fn(&Record) -> &str;

/// Specification for an index over one record field.
#[derive(Debug, Clone)]
pub struct IndexSpec {
    /// Field this index answers queries for.
    pub field: Field,
    /// Name of the index (internal, used in logs).
    pub name: String,
    /// Pulls the raw key out of a record.
    pub extractor: KeyExtractor,
    /// Normalization applied to keys and queries.
    pub rule: KeyRule,
}

impl IndexSpec {
    /// Creates a new index specification.
    pub fn new(
        field: Field,
        name: impl Into<String>,
        extractor: KeyExtractor,
        rule: KeyRule,
    ) -> Self {
        Self {
            field,
            name: name.into(),
            extractor,
            rule,
        }
    }

    /// Returns the standard specification for a field.
    ///
    /// Titles and authors are case-folded; ISBNs compare exactly.
    pub fn for_field(field: Field) -> Self {
        match field {
            Field::Title => Self::new(field, "title", Record::title, KeyRule::CaseFold),
            Field::Isbn => Self::new(field, "isbn", Record::isbn, KeyRule::Exact),
            Field::Author => Self::new(field, "author", Record::author, KeyRule::CaseFold),
        }
    }

    /// Derives the normalized key of a record.
    pub fn key_of(&self, record: &Record) -> String {
        self.rule.normalize((self.extractor)(record)).into_owned()
    }

    /// Normalizes a query string.
    pub fn normalize_query<'a>(&self, query: &'a str) -> Cow<'a, str> {
        self.rule.normalize(query)
    }
}

/// Single-valued exact-key index.
///
/// Implementations return the first structural match they encounter when a
/// key has been inserted more than once.
pub trait Index: Send + Sync {
    /// Returns the index specification.
    fn spec(&self) -> &IndexSpec;

    /// Returns the strategy this index implements.
    fn strategy(&self) -> Strategy;

    /// Inserts a record under its derived key.
    fn insert(&mut self, record: Arc<Record>);

    /// Looks up a record by exact (normalized) key.
    fn search(&self, query: &str) -> Option<Arc<Record>>;

    /// Returns the number of entries in the index.
    fn len(&self) -> usize;

    /// Returns true if the index is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
