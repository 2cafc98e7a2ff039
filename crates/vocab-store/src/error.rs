//! Store error types.

use thiserror::Error;

/// Errors that can occur in the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying SQLite error.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A backing database file does not exist on disk.
    #[error("The {name} database at {path} does not exist. Run `{script}` to create it.")]
    MissingDatabase {
        /// Logical database name (e.g. "UMLS").
        name: String,
        /// Absolute path that was checked.
        path: String,
        /// The script or command that produces the database.
        script: String,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
