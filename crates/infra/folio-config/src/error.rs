use std::path::PathBuf;
use thiserror::Error;

/// Failures of the persisted configuration store.
///
/// Loading never surfaces these; they only reach callers of save and reset.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read persisted config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to clear persisted config {path}: {source}")]
    Clear {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Persisted store lock was poisoned")]
    Poisoned,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write persisted config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
