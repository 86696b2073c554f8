//! Error types for pettrack-store.

use std::path::PathBuf;

/// Result type for pettrack-store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pettrack-store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to create the data directory.
    #[error("Failed to create data directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read the snapshot file.
    #[error("Failed to read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write or replace the snapshot file.
    #[error("Failed to write snapshot {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The snapshot already holds the largest representable id.
    #[error("No identifiers left after {0}")]
    IdsExhausted(i64),

    /// A writer panicked while holding the store lock.
    #[error("Store lock poisoned")]
    LockPoisoned,
}
