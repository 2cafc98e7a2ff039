//! The import loop.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use vocab_store::VocabStore;

use crate::error::{ImportError, ImportResult};
use crate::table::VocabTable;

/// Bulk importer for tab-delimited vocabulary files.
///
/// Borrows an explicitly constructed [`VocabStore`]; the importer never
/// owns or hides the connection.
///
/// # Example
///
/// ```ignore
/// use vocab_loader::{DescriptionTable, Importer};
/// use vocab_store::VocabStore;
///
/// let store = VocabStore::open("databases/snomed.db")?;
/// let importer = Importer::new(&store);
/// importer.import_file("sct2_Description_Full-en_INT_20240101.txt", &DescriptionTable)?;
/// ```
pub struct Importer<'a> {
    store: &'a VocabStore,
}

impl<'a> Importer<'a> {
    /// Creates an importer over the given store.
    pub fn new(store: &'a VocabStore) -> Self {
        Self { store }
    }

    /// Imports each table from its source file, skipping tables that
    /// already contain rows.
    ///
    /// Presence of any row is treated as "already imported": import is
    /// all-or-nothing per table, never per row-range.
    pub fn import_if_needed(&self, tables: &[(&dyn VocabTable, &Path)]) -> ImportResult<()> {
        for (table, path) in tables {
            table.create_schema(self.store)?;

            let existing = self.store.count_rows(table.table_name())?;
            if existing > 0 {
                tracing::debug!(
                    table = table.table_name(),
                    rows = existing,
                    "table already populated, skipping import"
                );
                continue;
            }

            self.import_file(path, *table)?;
        }
        Ok(())
    }

    /// Imports one source file into one table.
    pub fn import_file(&self, path: &Path, table: &dyn VocabTable) -> ImportResult<usize> {
        if !path.exists() {
            return Err(ImportError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        tracing::debug!(
            table = table.table_name(),
            file = %path.display(),
            "importing vocabulary file"
        );

        let file = File::open(path)?;
        self.import_reader(BufReader::new(file), table)
    }

    /// Imports tab-delimited data from a reader into one table.
    ///
    /// The first row is always treated as a header and discarded; it is not
    /// validated against an expected schema. The whole import runs inside
    /// one exclusive transaction, and any row failure aborts the run.
    pub fn import_reader<R: Read>(&self, reader: R, table: &dyn VocabTable) -> ImportResult<usize> {
        table.create_schema(self.store)?;

        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        self.store.begin_exclusive()?;
        match self.insert_all(&mut csv_reader, table) {
            Ok(count) => {
                self.store.commit()?;
                table.did_import(self.store)?;
                tracing::debug!(table = table.table_name(), rows = count, "import committed");
                Ok(count)
            }
            Err(err) => {
                // Leave the table exactly as it was before the run.
                let _ = self.store.rollback();
                Err(err)
            }
        }
    }

    fn insert_all<R: Read>(
        &self,
        csv_reader: &mut csv::Reader<R>,
        table: &dyn VocabTable,
    ) -> ImportResult<usize> {
        let mut count = 0;

        for result in csv_reader.records() {
            match result {
                Ok(record) => {
                    let line = record.position().map(|p| p.line()).unwrap_or(0);
                    table.insert_row(self.store, &record, line)?;
                    count += 1;
                }
                Err(source) => {
                    let line = source.position().map(|p| p.line()).unwrap_or(0);
                    return Err(ImportError::Parse { line, source });
                }
            }
        }

        Ok(count)
    }
}
