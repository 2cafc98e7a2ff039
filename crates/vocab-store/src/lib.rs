//! # vocab-store
//!
//! Minimal transactional SQLite façade for the vocabulary databases.
//!
//! Each logical database (`umls.db`, `snomed.db`, `rxnorm.db`) is opened as
//! its own [`VocabStore`]. The store is an explicitly constructed handle
//! that callers pass where needed, so the importer and the lookup layers
//! stay independently testable against in-memory databases.

#![warn(missing_docs)]

mod check;
mod error;
mod store;

pub use check::{check_databases, LogicalDb, ALL_DATABASES};
pub use error::{StoreError, StoreResult};
pub use store::VocabStore;

// Re-export the parameter machinery callers need to build queries.
pub use rusqlite::params;
pub use rusqlite::Row;
