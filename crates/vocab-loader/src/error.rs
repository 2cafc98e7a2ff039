//! Importer error types.

use thiserror::Error;
use vocab_store::StoreError;

/// Errors that can occur during a vocabulary import.
///
/// Every ingestion failure is fatal to the whole run: there is no per-row
/// retry or skip-and-continue. Row-level variants name the offending line.
#[derive(Error, Debug)]
pub enum ImportError {
    /// I/O error reading a source file.
    #[error("IO error reading vocabulary file: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-file parse error.
    #[error("parse error on line {line}: {source}")]
    Parse {
        /// Line number in the source file.
        line: u64,
        /// The underlying CSV error.
        source: csv::Error,
    },

    /// A row is missing an expected column.
    #[error("line {line}: missing column {index}")]
    MissingColumn {
        /// Line number in the source file.
        line: u64,
        /// Zero-based column index.
        index: usize,
    },

    /// A column that must be an integer could not be parsed.
    #[error("line {line}: invalid integer value: {value}")]
    InvalidInteger {
        /// Line number in the source file.
        line: u64,
        /// The invalid value that was encountered.
        value: String,
    },

    /// A row insert failed.
    #[error("cannot insert row from line {line}: {source}")]
    Insert {
        /// Line number in the source file.
        line: u64,
        /// The underlying store error.
        source: StoreError,
    },

    /// Store error outside of a row insert (schema, transaction, fix-up).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Source file not found.
    #[error("vocabulary file not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// No file with the expected prefix in the release directory.
    #[error("unable to locate a file starting with \"{prefix}\" in {directory}")]
    ReleaseFileMissing {
        /// The filename prefix that was searched for.
        prefix: String,
        /// The directory that was searched.
        directory: String,
    },
}

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
