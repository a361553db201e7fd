//! Core type definitions for Libris.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of a record in the catalog's master list.
///
/// Record IDs follow insertion order and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl RecordId {
    /// Creates a new record ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rec:{}", self.0)
    }
}

/// A searchable record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// The record title.
    Title,
    /// The record ISBN.
    Isbn,
    /// The record author.
    Author,
}

impl Field {
    /// All fields, in the order they are offered to callers.
    pub const ALL: [Field; 3] = [Field::Title, Field::Author, Field::Isbn];

    /// Returns the lowercase token for this field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Isbn => "isbn",
            Field::Author => "author",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Field::Title),
            "isbn" => Ok(Field::Isbn),
            "author" => Ok(Field::Author),
            other => Err(CoreError::invalid_argument(format!(
                "unknown field {other:?}, expected title, isbn or author"
            ))),
        }
    }
}

/// A lookup algorithm compared against others for the same query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Unbalanced binary search tree descent.
    Tree,
    /// Chained hash table probe.
    Hash,
    /// Direct lookup in the author grouping.
    Grouped,
    /// Scan of the whole master list.
    Linear,
}

impl Strategy {
    /// Returns the display name of the strategy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Tree => "Binary Search Tree",
            Strategy::Hash => "Hash Table",
            Strategy::Grouped => "Grouped Index",
            Strategy::Linear => "Linear Search",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of whoever submitted a search.
///
/// The catalog records the requester verbatim; validating it is the
/// caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requester {
    /// Caller-assigned identifier (e.g. a student ID).
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Requester {
    /// Creates a new requester.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Requester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}
