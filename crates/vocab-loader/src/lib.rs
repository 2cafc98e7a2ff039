//! # vocab-loader
//!
//! Streaming importer for tab-delimited vocabulary release files.
//!
//! Each source file is imported into one normalized SQLite table inside a
//! single exclusive transaction: a crash mid-import leaves the table either
//! fully populated or fully empty. Row inserts use insert-or-ignore keyed on
//! the table's primary key, so re-running an import silently absorbs
//! duplicates. After a successful commit each table runs its own post-import
//! fix-up hook.

#![warn(missing_docs)]

mod discover;
mod error;
mod importer;
mod table;

pub use discover::{
    discover_release_files, find_file_with_prefix, ReleaseFiles, DESCRIPTION_PREFIX,
    RELATIONSHIP_PREFIX,
};
pub use error::{ImportError, ImportResult};
pub use importer::Importer;
pub use table::{DescriptionTable, RelationshipTable, VocabTable};
