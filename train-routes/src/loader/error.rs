//! Loader error types.

use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while reading records from a source.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// The source could not be opened at all
    #[error("cannot open {path:?}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A single record could not be read
    #[error("unreadable record {record}: {message}")]
    Record { record: usize, message: String },
}

impl LoaderError {
    /// Path of the source when it does not exist.
    ///
    /// Other open failures, such as a permission error, return `None`.
    pub fn missing_path(&self) -> Option<&Path> {
        match self {
            Self::SourceUnavailable { path, source } if source.kind() == io::ErrorKind::NotFound => {
                Some(path)
            }
            _ => None,
        }
    }
}

/// Reasons a readable record does not describe an edge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRecord {
    /// Fewer than origin, destination and cost
    #[error("expected at least 3 fields, found {0}")]
    TooFewFields(usize),

    /// Origin is blank
    #[error("blank origin station")]
    BlankOrigin,

    /// Destination is blank
    #[error("blank destination station")]
    BlankDestination,

    /// Cost is not a non-negative integer
    #[error("invalid travel time: {0:?}")]
    InvalidCost(String),
}
