//! Catalog records.

use crate::types::Field;
use serde::Serialize;

/// One catalog entry.
///
/// Records are immutable once created. The catalog shares a single
/// allocation between its master list and every index, so two handles to the
/// same stored record compare equal by pointer as well as by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Record {
    title: String,
    author: String,
    isbn: String,
    content_reference: String,
}

impl Record {
    /// Creates a new record.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        content_reference: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            content_reference: content_reference.into(),
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the ISBN.
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Returns the opaque content reference (e.g. a document path).
    ///
    /// The catalog never interprets this value.
    #[must_use]
    pub fn content_reference(&self) -> &str {
        &self.content_reference
    }

    /// Returns the raw value of a searchable field.
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Isbn => &self.isbn,
            Field::Author => &self.author,
        }
    }
}

/// The sample books a catalog is seeded with by default.
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new(
            "አህያ በወረቀት ቤት",
            "Alemayehu Wase",
            "9781234",
            "books/ahya.pdf",
        ),
        Record::new(
            "ፍቅር እስከ መቃብር",
            "Hadis Alemayehu",
            "9785678",
            "books/fikir.pdf",
        ),
        Record::new(
            "ወርቅ ያለበት ድርቅ",
            "Bealu Girma",
            "9789101",
            "books/werk.pdf",
        ),
    ]
}

/// Synthetic records with zero-padded, ascending ISBNs and titles.
///
/// Record `i` has title `Title {i:08}`, ISBN `{i:010}` and author
/// `Author {i % authors}`. Inserting them in order degrades both trees into
/// chains. `authors` is clamped to at least one.
pub fn synthetic_records(count: usize, authors: usize) -> Vec<Record> {
    let authors = authors.max(1);
    (0..count)
        .map(|i| {
            Record::new(
                format!("Title {i:08}"),
                format!("Author {}", i % authors),
                format!("{i:010}"),
                format!("books/{i}.pdf"),
            )
        })
        .collect()
}
