use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};

use super::{check_quota, entry_size, StorageBackend, StorageError};

/// Durable store on top of a SQLite database, one row per key.
pub struct SqliteStorage {
    conn: Connection,
    quota: Option<usize>,
}

impl SqliteStorage {
    /// Opens (or creates) the store at `path`, creating parent directories
    /// and the table as needed.
    ///
    /// # Examples
    /// ```
    /// use baby_dday::services::storage::SqliteStorage;
    /// let storage = SqliteStorage::open_in_memory().unwrap();
    /// ```
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create dir {}", parent.display()))?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open storage at {}", path.display()))?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory storage")?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let storage = Self { conn, quota: None };
        storage.initialize_schema()?;
        Ok(storage)
    }

    /// Caps the total bytes (keys plus values) the store will accept.
    pub fn with_quota(mut self, quota: usize) -> Self {
        self.quota = Some(quota);
        self
    }

    /// Provides read access to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn initialize_schema(&self) -> Result<()> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS local_storage (
                    key TEXT PRIMARY KEY NOT NULL,
                    value TEXT NOT NULL,
                    updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )
            .context("Failed to create local_storage table")?;
        Ok(())
    }

    /// Bytes used by every entry except `key`.
    fn usage_excluding(&self, key: &str) -> Result<usize, StorageError> {
        let used: i64 = self
            .conn
            .query_row(
                "SELECT COALESCE(SUM(LENGTH(CAST(key AS BLOB)) + LENGTH(CAST(value AS BLOB))), 0)
                 FROM local_storage WHERE key != ?1",
                [key],
                |row| row.get(0),
            )
            .map_err(backend_error)?;
        Ok(used.max(0) as usize)
    }

    /// Total bytes currently stored.
    pub fn usage_bytes(&self) -> Result<usize, StorageError> {
        self.usage_excluding("")
    }
}

impl StorageBackend for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(backend_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.quota.is_some() {
            let used = self.usage_excluding(key)?;
            check_quota(used, entry_size(key, value), self.quota)?;
        }

        self.conn
            .execute(
                "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = CURRENT_TIMESTAMP",
                [key, value],
            )
            .map_err(backend_error)?;
        Ok(())
    }
}

fn backend_error(err: rusqlite::Error) -> StorageError {
    StorageError::Backend(err.to_string())
}
