//! SQLite-backed key-value store.

use std::path::Path;

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::KeyValueStore;
use crate::error::{DatabaseResultExt, InvitationError, Result};

/// A persistent store holding every entry in a single `entries` table.
pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path` and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Self::with_connection(connection)
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self> {
        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initializes the database schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }

    /// All stored keys in sorted order.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare("SELECT key FROM entries ORDER BY key")
            .db_context("Failed to prepare key listing")?;
        let keys = stmt
            .query_map([], |row| row.get(0))
            .db_context("Failed to list keys")?
            .collect::<rusqlite::Result<Vec<String>>>()
            .db_context("Failed to read key")?;
        Ok(keys)
    }
}

impl KeyValueStore for SqliteStore {
    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(
                "INSERT INTO entries (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE
                 SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .map_err(|e| InvitationError::StoreWrite {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(
                "SELECT value FROM entries WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| InvitationError::StoreRead {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.connection
            .execute("DELETE FROM entries WHERE key = ?1", params![key])
            .map_err(|e| InvitationError::StoreWrite {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }
}
