//! Release file discovery.
//!
//! Locates vocabulary files by filename prefix inside an extracted release
//! directory tree.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ImportError, ImportResult};

/// Filename prefix of the full English description release file.
pub const DESCRIPTION_PREFIX: &str = "sct2_Description_Full-en_INT_";

/// Filename prefix of the full relationship release file.
pub const RELATIONSHIP_PREFIX: &str = "sct2_Relationship_Full_INT_";

/// The release files required for an import.
#[derive(Debug, Clone)]
pub struct ReleaseFiles {
    /// Path to the description file.
    pub description_file: PathBuf,
    /// Path to the relationship file.
    pub relationship_file: PathBuf,
}

/// Finds the description and relationship files in a release directory.
///
/// # Errors
/// Returns [`ImportError::ReleaseFileMissing`] naming the prefix when a
/// required file cannot be located.
pub fn discover_release_files<P: AsRef<Path>>(dir: P) -> ImportResult<ReleaseFiles> {
    let dir = dir.as_ref();

    let description_file = require_file(dir, DESCRIPTION_PREFIX)?;
    let relationship_file = require_file(dir, RELATIONSHIP_PREFIX)?;

    Ok(ReleaseFiles {
        description_file,
        relationship_file,
    })
}

fn require_file(dir: &Path, prefix: &str) -> ImportResult<PathBuf> {
    find_file_with_prefix(dir, prefix)?.ok_or_else(|| ImportError::ReleaseFileMissing {
        prefix: prefix.to_string(),
        directory: dir.display().to_string(),
    })
}

/// Recursively searches `dir` for the first file whose name starts with
/// `prefix`.
///
/// Files at the current level are checked before descending into
/// subdirectories.
pub fn find_file_with_prefix(dir: &Path, prefix: &str) -> ImportResult<Option<PathBuf>> {
    let mut subdirs = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type()?.is_dir() {
            subdirs.push(path);
            continue;
        }

        let name = entry.file_name();
        if name.to_string_lossy().starts_with(prefix) {
            return Ok(Some(path));
        }
    }

    for subdir in subdirs {
        if let Some(found) = find_file_with_prefix(&subdir, prefix)? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("vocab-release-{}", std::process::id()));
        let terminology = dir.join("Full").join("Terminology");
        fs::create_dir_all(&terminology).unwrap();
        fs::write(
            terminology.join("sct2_Description_Full-en_INT_20240101.txt"),
            b"header\n",
        )
        .unwrap();
        fs::write(
            terminology.join("sct2_Relationship_Full_INT_20240101.txt"),
            b"header\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_discover_finds_nested_files() {
        let dir = release_dir();
        let files = discover_release_files(&dir).unwrap();

        assert!(files
            .description_file
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(DESCRIPTION_PREFIX));
        assert!(files
            .relationship_file
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(RELATIONSHIP_PREFIX));
    }

    #[test]
    fn test_missing_prefix_is_reported() {
        let dir = release_dir();
        let err = find_file_with_prefix(&dir, "sct2_Concept_Full_INT_").unwrap();
        assert!(err.is_none());

        let err = require_file(&dir, "sct2_Concept_Full_INT_").unwrap_err();
        assert!(err.to_string().contains("sct2_Concept_Full_INT_"));
    }
}
