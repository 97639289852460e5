//! Error types for the run viewer.
//!
//! A single error enum covers every failure the lookup loop can observe.
//! Recoverable kinds are handled by re-prompting where they originate;
//! the rest end the session.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::RunId;

/// All run viewer errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Time text did not match `mm:ss.fff`
    #[error("invalid time '{input}': required format is mm:ss.fff")]
    InvalidFormat {
        /// The rejected input
        input: String,
    },

    /// Run id list was not whitespace-separated non-negative integers
    #[error("invalid selection '{input}': enter run IDs separated by spaces")]
    InvalidSelection {
        /// The rejected input
        input: String,
    },

    /// No run with this id exists in the dataset
    #[error("no run found with ID {0}")]
    NotFound(RunId),

    /// Dataset could not be opened or read
    #[error("dataset unavailable: {0}")]
    StoreUnavailable(String),

    /// No dataset file in the search directory
    #[error("database not found in {}, place the database in the same directory as the program", dir.display())]
    NoDatasetFound {
        /// Directory that was searched
        dir: PathBuf,
    },

    /// More than one candidate dataset file
    #[error("found {} candidate databases, keep exactly one: {}", candidates.len(), join_paths(candidates))]
    AmbiguousDataset {
        /// Every matching file, sorted
        candidates: Vec<PathBuf>,
    },

    /// A query against the dataset failed
    #[error("query failed: {0}")]
    QueryFailure(String),

    /// The user closed the prompt (Ctrl-C / end of input)
    #[error("prompt interrupted")]
    Interrupted,

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for run viewer operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Errors that are answered by re-prompting rather than ending the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::InvalidFormat { .. }
                | Error::InvalidSelection { .. }
                | Error::NotFound(_)
                | Error::QueryFailure(_)
        )
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Errors raised before a session can start.
    pub fn is_startup_failure(&self) -> bool {
        matches!(
            self,
            Error::StoreUnavailable(_)
                | Error::NoDatasetFound { .. }
                | Error::AmbiguousDataset { .. }
                | Error::Config(_)
        )
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
