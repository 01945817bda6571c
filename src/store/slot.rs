use rusqlite::{params, Connection, Error as SqlError, OptionalExtension};
use std::fs;
use std::path::Path;

use super::error::StoreError;

/// A key-value layer holding one string per key.
pub trait SlotBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Replaces the value under `key`. Readers see either the old or the new value.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

pub struct SqliteSlots {
    conn: Connection,
}

impl SqliteSlots {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Wraps an open connection, creating the `preferences` table if needed.
    pub fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(Self { conn })
    }
}

impl SlotBackend for SqliteSlots {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| match e {
                // value is there but not text
                SqlError::InvalidColumnType(..) | SqlError::FromSqlConversionFailure(..) => {
                    StoreError::CorruptStore(Box::new(e))
                }
                e => StoreError::StorageIo(e),
            })?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO preferences (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}
