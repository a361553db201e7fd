//! # Libris Testkit
//!
//! Test utilities for Libris.
//!
//! This crate provides:
//! - Catalog fixtures and requester helpers
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust,ignore
//! use libris_testkit::prelude::*;
//!
//! #[test]
//! fn finds_samples() {
//!     let catalog = sample_catalog();
//!     catalog.search(Field::Isbn, "9785678", &tester()).unwrap();
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use libris_core::{Catalog, Field, Record, Requester, SearchComparison};
}

pub use fixtures::*;
pub use generators::*;
