//! SQLite-backed word store
//!
//! Owns the single table of word records and every mutation against it.
//! Each mutation is one SQL statement and is immediately durable; the store
//! assumes single-process, single-writer access.

use std::path::PathBuf;

use log::debug;
use regex::RegexBuilder;
use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, params, params_from_iter};
use thiserror::Error;

use crate::core::WordRecord;
use crate::query::{SortOrder, WordFilter};

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Insert of a word that is already stored. Per-item, never fatal for a
    /// batch.
    #[error("word '{0}' already exists")]
    DuplicateWord(String),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Where the store lives: database file and table name.
///
/// Built once from the command-line arguments and passed at construction;
/// nothing downstream reads configuration ambiently.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub database: PathBuf,
    pub table: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("words.db"),
            table: "words".to_string(),
        }
    }
}

/// Handle to the word table.
pub struct WordStore {
    conn: Connection,
    table: String,
}

impl WordStore {
    /// Open (creating if absent) the store described by `config`.
    ///
    /// Ensures the table exists and registers the case-insensitive `REGEXP`
    /// function used by the character-set filter.
    ///
    /// # Errors
    /// Returns `StoreError::Sqlite` if the file cannot be opened or the
    /// schema cannot be created.
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        debug!("opening store at {:?}", config.database);
        let conn = Connection::open(&config.database)?;
        Self::with_connection(conn, &config.table)
    }

    /// Open a throwaway in-memory store. Used by tests.
    ///
    /// # Errors
    /// Returns `StoreError::Sqlite` if SQLite refuses the connection.
    pub fn open_in_memory(table: &str) -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn, table)
    }

    fn with_connection(conn: Connection, table: &str) -> Result<Self, StoreError> {
        let store = Self {
            conn,
            table: quote_ident(table),
        };
        store.create_table()?;
        store.register_regexp()?;
        Ok(store)
    }

    // AUTOINCREMENT keeps deleted ids from ever being reassigned.
    fn create_table(&self) -> Result<(), StoreError> {
        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                word TEXT NOT NULL UNIQUE,
                language TEXT,
                length INTEGER NOT NULL
            )",
            self.table
        );
        debug!("ensuring table {}", self.table);
        self.conn.execute(&ddl, [])?;
        Ok(())
    }

    /// `REGEXP(pattern, text)`, case-insensitive, so the character-set
    /// predicate can run inside the scan instead of in-process.
    fn register_regexp(&self) -> Result<(), StoreError> {
        self.conn.create_scalar_function(
            "regexp",
            2,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let pattern = ctx.get::<String>(0)?;
                let text = ctx.get::<String>(1)?;
                let re = RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| rusqlite::Error::UserFunctionError(Box::new(e)))?;
                Ok(re.is_match(&text))
            },
        )?;
        Ok(())
    }

    /// Whether a record with this exact word is present.
    ///
    /// # Errors
    /// Returns `StoreError::Sqlite` on query failure.
    pub fn exists(&self, word: &str) -> Result<bool, StoreError> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE word = ?1)", self.table);
        let found = self.conn.query_row(&sql, params![word], |row| row.get(0))?;
        Ok(found)
    }

    /// Insert a record, returning its assigned id.
    ///
    /// The unique constraint on `word` is authoritative: callers are expected
    /// to pre-check with [`exists`](Self::exists), but a violation still maps
    /// to `DuplicateWord` rather than a raw database error.
    ///
    /// # Errors
    /// `StoreError::DuplicateWord` if the word is already stored, otherwise
    /// `StoreError::Sqlite`.
    pub fn insert(
        &self,
        word: &str,
        language: Option<&str>,
        length: i64,
    ) -> Result<i64, StoreError> {
        let sql = format!(
            "INSERT INTO {} (word, language, length) VALUES (?1, ?2, ?3)",
            self.table
        );
        match self.conn.execute(&sql, params![word, language, length]) {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(StoreError::DuplicateWord(word.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Remove the record for `word`, reporting whether one was removed.
    ///
    /// # Errors
    /// Returns `StoreError::Sqlite` on statement failure.
    pub fn delete(&self, word: &str) -> Result<bool, StoreError> {
        let sql = format!("DELETE FROM {} WHERE word = ?1", self.table);
        let removed = self.conn.execute(&sql, params![word])?;
        Ok(removed > 0)
    }

    /// All records matching `filter`, ordered per `order`.
    ///
    /// Default order (no explicit direction) is by `word`, descending. Ties
    /// under a length sort retain scan order; there is no secondary key.
    ///
    /// # Errors
    /// Returns `StoreError::Sqlite` on query failure.
    pub fn scan(
        &self,
        filter: &WordFilter,
        order: Option<SortOrder>,
    ) -> Result<Vec<WordRecord>, StoreError> {
        let (where_clause, params) = filter.where_clause();
        let order_clause = order.map_or("ORDER BY word DESC", SortOrder::order_clause);

        let sql = format!(
            "SELECT id, word, language, length FROM {} {where_clause} {order_clause}",
            self.table
        );
        debug!("scan: {sql}");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(params), |row| {
            Ok(WordRecord {
                id: row.get(0)?,
                word: row.get(1)?,
                language: row.get(2)?,
                length: row.get(3)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Full scan in natural table order, as used by export.
    ///
    /// # Errors
    /// Returns `StoreError::Sqlite` on query failure.
    pub fn scan_unordered(&self) -> Result<Vec<WordRecord>, StoreError> {
        let sql = format!("SELECT id, word, language, length FROM {}", self.table);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(WordRecord {
                id: row.get(0)?,
                word: row.get(1)?,
                language: row.get(2)?,
                length: row.get(3)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Number of stored records.
    ///
    /// # Errors
    /// Returns `StoreError::Sqlite` on query failure.
    pub fn count(&self) -> Result<u64, StoreError> {
        let sql = format!("SELECT COUNT(*) FROM {}", self.table);
        let n: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(n as u64)
    }
}

// Table names arrive from the command line and cannot be bound as
// parameters, so they are quoted as identifiers instead.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
