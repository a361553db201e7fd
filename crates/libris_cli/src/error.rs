//! CLI error types.

use libris_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// A requester ID or name was left blank.
    #[error("Please fill all fields")]
    MissingRequester,

    /// A script line could not be parsed.
    #[error("script line {line}: {message}")]
    ScriptSyntax {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// A script file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The catalog rejected an operation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CliError {
    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::ScriptSyntax {
            line,
            message: message.into(),
        }
    }
}
