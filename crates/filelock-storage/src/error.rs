//! Storage error types for filelock-storage.

use thiserror::Error;

/// Errors produced by config storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A SQLite operation failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// A permission check guarding the write failed.
    #[error(transparent)]
    Core(#[from] filelock_core::CoreError),
}
