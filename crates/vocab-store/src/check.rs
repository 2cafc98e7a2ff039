//! Database presence checks.
//!
//! Verifies that the backing database files exist before any lookup runs.
//! This is a precondition gate: the error names the missing file and the
//! script that produces it, and callers may log and continue or propagate.

use std::path::Path;

use crate::error::{StoreError, StoreResult};

/// A logical vocabulary database backed by one SQLite file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalDb {
    /// UMLS Metathesaurus descriptions (`umls.db`).
    Umls,
    /// Normalized SNOMED CT tables (`snomed.db`).
    Snomed,
    /// RxNorm tables (`rxnorm.db`).
    RxNorm,
}

/// All logical databases, in check order.
pub const ALL_DATABASES: [LogicalDb; 3] = [LogicalDb::Umls, LogicalDb::Snomed, LogicalDb::RxNorm];

impl LogicalDb {
    /// Human-readable database name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Umls => "UMLS",
            Self::Snomed => "SNOMED",
            Self::RxNorm => "RxNorm",
        }
    }

    /// File name of the backing store inside the databases directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Umls => "umls.db",
            Self::Snomed => "snomed.db",
            Self::RxNorm => "rxnorm.db",
        }
    }

    /// The script or command that produces the backing store.
    pub fn setup_script(self) -> &'static str {
        match self {
            Self::Umls => "databases/umls.sh",
            Self::Snomed => "vocab import <snomed-dir>",
            Self::RxNorm => "databases/rxnorm.sh",
        }
    }
}

/// Checks that each requested database file exists under `dir`.
///
/// Returns the first failure as a [`StoreError::MissingDatabase`] carrying
/// the expected path and the remediation script.
pub fn check_databases(dir: &Path, checks: &[LogicalDb]) -> StoreResult<()> {
    for db in checks {
        let path = dir.join(db.file_name());
        if !path.exists() {
            return Err(StoreError::MissingDatabase {
                name: db.name().to_string(),
                path: path.display().to_string(),
                script: db.setup_script().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(label: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("vocab-store-{}-{}", label, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_database_names_script() {
        let dir = scratch_dir("missing");
        let err = check_databases(&dir, &[LogicalDb::Umls]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("umls.db"));
        assert!(message.contains("databases/umls.sh"));
    }

    #[test]
    fn test_present_databases_pass() {
        let dir = scratch_dir("present");
        for db in ALL_DATABASES {
            fs::write(dir.join(db.file_name()), b"").unwrap();
        }
        assert!(check_databases(&dir, &ALL_DATABASES).is_ok());
    }

    #[test]
    fn test_empty_check_list_passes() {
        let dir = scratch_dir("empty");
        assert!(check_databases(&dir, &[]).is_ok());
    }
}
