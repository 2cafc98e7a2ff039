//! Table mapping for vocabulary imports.
//!
//! Each importable table implements [`VocabTable`]: idempotent schema
//! creation, a positional row-to-insert mapping, and an optional
//! post-import fix-up hook. New tables register by implementing the trait;
//! the import loop itself never changes.

use csv::StringRecord;
use vocab_store::{params, StoreResult, VocabStore};
use vocab_types::{well_known, DescriptionKind};

use crate::error::{ImportError, ImportResult};

/// A normalized table that can be populated from a tab-delimited file.
pub trait VocabTable {
    /// Name of the backing SQL table.
    fn table_name(&self) -> &'static str;

    /// Creates the table and its indexes if absent.
    fn create_schema(&self, store: &VocabStore) -> StoreResult<()>;

    /// Maps one source record to an insert-or-ignore statement.
    ///
    /// Column indices are fixed by the known source schema. `line` is the
    /// source file line, reported on failure.
    fn insert_row(&self, store: &VocabStore, record: &StringRecord, line: u64) -> ImportResult<()>;

    /// Post-import hook, run once after the import transaction commits.
    fn did_import(&self, store: &VocabStore) -> StoreResult<()> {
        let _ = store;
        Ok(())
    }
}

/// Returns the field at `index` or a missing-column error naming the line.
fn field<'r>(record: &'r StringRecord, index: usize, line: u64) -> ImportResult<&'r str> {
    record
        .get(index)
        .ok_or(ImportError::MissingColumn { line, index })
}

/// Parses the field at `index` as an integer.
fn integer(record: &StringRecord, index: usize, line: u64) -> ImportResult<i64> {
    let value = field(record, index, line)?;
    value.parse().map_err(|_| ImportError::InvalidInteger {
        line,
        value: value.to_string(),
    })
}

/// The normalized `descriptions` table.
///
/// Source columns: 4 concept id, 5 language, 6 description type (mapped to
/// the stored kind), 7 term, 2 active flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptionTable;

impl VocabTable for DescriptionTable {
    fn table_name(&self) -> &'static str {
        "descriptions"
    }

    fn create_schema(&self, store: &VocabStore) -> StoreResult<()> {
        store.create_table_if_absent(
            "descriptions",
            "(
                concept_id INTEGER PRIMARY KEY,
                lang TEXT,
                term TEXT,
                kind VARCHAR,
                active INT
            )",
        )?;
        store.create_index_if_absent("kind_index", "descriptions", "kind")?;
        Ok(())
    }

    fn insert_row(&self, store: &VocabStore, record: &StringRecord, line: u64) -> ImportResult<()> {
        let concept_id = integer(record, 4, line)?;
        let language = field(record, 5, line)?;
        let term = field(record, 7, line)?;
        let active = integer(record, 2, line)?;

        // Unknown or non-numeric type discriminators store an empty kind.
        let kind = record
            .get(6)
            .and_then(|value| value.parse().ok())
            .map(DescriptionKind::from_type_id)
            .unwrap_or_default();

        store
            .execute(
                "INSERT OR IGNORE INTO descriptions
                    (concept_id, lang, term, kind, active)
                    VALUES (?1, ?2, ?3, ?4, ?5)",
                params![concept_id, language, term, kind.as_str(), active],
            )
            .map_err(|source| ImportError::Insert { line, source })?;
        Ok(())
    }
}

/// The normalized `relationships` table.
///
/// Source columns: 0 relationship id, 4 source, 5 destination, 7 type,
/// 2 active flag. `rel_text` is left unset at insert time and filled in by
/// the post-import fix-up for the known type codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelationshipTable;

impl VocabTable for RelationshipTable {
    fn table_name(&self) -> &'static str {
        "relationships"
    }

    fn create_schema(&self, store: &VocabStore) -> StoreResult<()> {
        store.create_table_if_absent(
            "relationships",
            "(
                relationship_id INTEGER PRIMARY KEY,
                source_id INT,
                destination_id INT,
                rel_type INT,
                rel_text VARCHAR,
                active INT
            )",
        )?;
        store.create_index_if_absent("source_index", "relationships", "source_id")?;
        store.create_index_if_absent("destination_index", "relationships", "destination_id")?;
        store.create_index_if_absent("rel_type_index", "relationships", "rel_type")?;
        store.create_index_if_absent("rel_text_index", "relationships", "rel_text")?;
        Ok(())
    }

    fn insert_row(&self, store: &VocabStore, record: &StringRecord, line: u64) -> ImportResult<()> {
        let relationship_id = integer(record, 0, line)?;
        let source_id = integer(record, 4, line)?;
        let destination_id = integer(record, 5, line)?;
        let rel_type = integer(record, 7, line)?;
        let active = integer(record, 2, line)?;

        store
            .execute(
                "INSERT OR IGNORE INTO relationships
                    (relationship_id, source_id, destination_id, rel_type, active)
                    VALUES (?1, ?2, ?3, ?4, ?5)",
                params![relationship_id, source_id, destination_id, rel_type, active],
            )
            .map_err(|source| ImportError::Insert { line, source })?;
        Ok(())
    }

    fn did_import(&self, store: &VocabStore) -> StoreResult<()> {
        store.execute(
            "UPDATE relationships SET rel_text = 'isa' WHERE rel_type = ?1",
            params![well_known::IS_A],
        )?;
        store.execute(
            "UPDATE relationships SET rel_text = 'finding_site' WHERE rel_type = ?1",
            params![well_known::FINDING_SITE],
        )?;
        Ok(())
    }
}
