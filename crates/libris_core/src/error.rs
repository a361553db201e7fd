//! Error types for Libris core.

use crate::types::Field;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in Libris core operations.
///
/// A lookup that finds nothing is not an error; it is represented in the
/// search result as an absent record or an empty sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The caller supplied an argument the catalog cannot act on.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument.
        message: String,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration issue.
        message: String,
    },

    /// Two strategies answering the same query disagreed.
    #[error("internal inconsistency on {field} query {query:?}: {detail}")]
    InternalInconsistency {
        /// Field that was searched.
        field: Field,
        /// Raw query text.
        query: String,
        /// What the strategies reported.
        detail: String,
    },
}

impl CoreError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates an internal inconsistency error.
    pub fn inconsistency(
        field: Field,
        query: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::InternalInconsistency {
            field,
            query: query.into(),
            detail: detail.into(),
        }
    }

    /// Returns true if this error signals a broken index invariant rather
    /// than bad caller input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::InternalInconsistency { .. })
    }
}
