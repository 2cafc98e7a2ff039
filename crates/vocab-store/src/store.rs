//! SQLite connection wrapper.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, Params, Row};

use crate::error::StoreResult;

/// A handle on one SQLite vocabulary database.
///
/// Wraps a single [`rusqlite::Connection`] behind the small surface the
/// importer and lookups need: statement execution, single-row and multi-row
/// queries, last-insert-id inserts, explicit transaction control, and
/// idempotent table/index creation.
///
/// # Example
///
/// ```
/// use vocab_store::{params, VocabStore};
///
/// let store = VocabStore::open_in_memory().unwrap();
/// store.create_table_if_absent("names", "(id INTEGER PRIMARY KEY, name TEXT)").unwrap();
/// store.execute("INSERT INTO names (id, name) VALUES (?1, ?2)", params![1, "aspirin"]).unwrap();
///
/// let name: Option<String> = store
///     .query_one("SELECT name FROM names WHERE id = ?1", params![1], |row| row.get(0))
///     .unwrap();
/// assert_eq!(name.as_deref(), Some("aspirin"));
/// ```
pub struct VocabStore {
    conn: Connection,
}

impl VocabStore {
    /// Opens (or creates) a database file.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Executes a statement, returning the number of affected rows.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> StoreResult<usize> {
        Ok(self.conn.execute(sql, params)?)
    }

    /// Executes an insert, returning the last inserted row id.
    pub fn execute_insert<P: Params>(&self, sql: &str, params: P) -> StoreResult<i64> {
        self.conn.execute(sql, params)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Runs a query expected to match at most one row.
    ///
    /// Returns `None` when no row matches; a miss is not an error.
    pub fn query_one<T, P, F>(&self, sql: &str, params: P, mapper: F) -> StoreResult<Option<T>>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        Ok(self.conn.query_row(sql, params, mapper).optional()?)
    }

    /// Runs a query and maps every row, in the store's natural row order.
    pub fn query_all<T, P, F>(&self, sql: &str, params: P, mapper: F) -> StoreResult<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, mapper)?;
        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    /// Begins a deferred transaction.
    pub fn begin(&self) -> StoreResult<()> {
        self.conn.execute_batch("BEGIN")?;
        Ok(())
    }

    /// Begins an exclusive transaction.
    ///
    /// Used by the importer to hold one transaction across an entire file,
    /// so a crash mid-import leaves the table fully populated or fully
    /// empty.
    pub fn begin_exclusive(&self) -> StoreResult<()> {
        self.conn.execute_batch("BEGIN EXCLUSIVE")?;
        Ok(())
    }

    /// Commits the open transaction.
    pub fn commit(&self) -> StoreResult<()> {
        self.conn.execute_batch("COMMIT")?;
        Ok(())
    }

    /// Rolls back the open transaction.
    pub fn rollback(&self) -> StoreResult<()> {
        self.conn.execute_batch("ROLLBACK")?;
        Ok(())
    }

    /// Creates a table if it does not exist yet.
    ///
    /// `columns` is the parenthesized column definition list.
    pub fn create_table_if_absent(&self, name: &str, columns: &str) -> StoreResult<()> {
        let sql = format!("CREATE TABLE IF NOT EXISTS {} {}", name, columns);
        self.conn.execute_batch(&sql)?;
        Ok(())
    }

    /// Creates a single-column index if it does not exist yet.
    pub fn create_index_if_absent(
        &self,
        index: &str,
        table: &str,
        column: &str,
    ) -> StoreResult<()> {
        let sql = format!(
            "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
            index, table, column
        );
        self.conn.execute_batch(&sql)?;
        Ok(())
    }

    /// Counts the rows of a table.
    pub fn count_rows(&self, table: &str) -> StoreResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        let count = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count)
    }
}

impl std::fmt::Debug for VocabStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VocabStore").finish_non_exhaustive()
    }
}
