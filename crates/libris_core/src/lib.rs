//! # Libris Core
//!
//! Indexed record store for a small book catalog.
//!
//! This crate provides:
//! - Immutable records shared across several indexes
//! - A binary search tree and a chained hash table per key field
//! - An author grouping checked against a linear scan
//! - A catalog that times competing strategies for each search
//! - An append-only query log and statistics

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod comparison;
mod config;
mod error;
pub mod index;
mod query_log;
mod record;
mod shared;
mod stats;
mod types;

pub use catalog::Catalog;
pub use comparison::{AuthorComparison, KeyComparison, SearchComparison, StrategySummary, Timed};
pub use config::CatalogConfig;
pub use error::{CoreError, CoreResult};
pub use query_log::{QueryLog, QueryLogEntry};
pub use record::{sample_records, synthetic_records, Record};
pub use shared::SharedCatalog;
pub use stats::{CatalogStats, StatsSnapshot};
pub use types::{Field, RecordId, Requester, Strategy};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
