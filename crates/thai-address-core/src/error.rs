// crates/thai-address-core/src/error.rs
use crate::common::Level;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while constructing an [`AddressDb`](crate::AddressDb).
///
/// Only initialization can fail. Query operations never return this type:
/// a lookup that finds nothing yields an empty value instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{level} data source not found at {}: {source}", .path.display())]
    NotFound {
        level: Level,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {level} data: {source}")]
    Io {
        level: Level,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {level} data: {source}")]
    Json {
        level: Level,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported data source: {0}")]
    Unsupported(String),
}

impl LoadError {
    /// The collection the load failed on, if the error is tied to one.
    pub fn level(&self) -> Option<Level> {
        match self {
            LoadError::NotFound { level, .. }
            | LoadError::Io { level, .. }
            | LoadError::Json { level, .. } => Some(*level),
            LoadError::Unsupported(_) => None,
        }
    }

    /// serde_json reports short reads as I/O errors; keep those apart from
    /// genuinely malformed payloads.
    pub(crate) fn from_json(level: Level, source: serde_json::Error) -> Self {
        if source.is_io() {
            LoadError::Io {
                level,
                source: source.into(),
            }
        } else {
            LoadError::Json { level, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
