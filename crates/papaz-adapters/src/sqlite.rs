//! SQLite implementation of [`KeyValueStorage`].
//!
//! The persistent storage area behind [`LocalStorage`](crate::LocalStorage).
//! Uses rusqlite with bundled SQLite.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::trace;

use crate::error::{AdapterError, Result};
use crate::migration;
use crate::storage::KeyValueStorage;

/// SQLite-backed storage area.
///
/// Thread-safe via an internal mutex. Clones share the connection.
#[derive(Clone)]
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Execute an operation on the connection.
    fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| AdapterError::Poisoned(format!("sqlite connection: {}", e)))?;
        f(&conn)
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        trace!(key, "sqlite get_item");
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT value FROM storage WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(AdapterError::from)
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        trace!(key, len = value.len(), "sqlite set_item");
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, value, migration::now_millis()],
            )?;
            Ok(())
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM storage WHERE key = ?1", params![key])?;
            Ok(())
        })
    }

    fn keys(&self) -> Result<Vec<String>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT key FROM storage ORDER BY key")?;
            let keys = stmt
                .query_map([], |row| row.get(0))?
                .collect::<std::result::Result<Vec<String>, _>>()?;
            Ok(keys)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_get_set_remove() {
        let storage = SqliteStorage::open_memory().unwrap();

        assert_eq!(storage.get_item("db").unwrap(), None);

        storage.set_item("db", "{}").unwrap();
        storage.set_item("db", "{\"a\":1}").unwrap();
        assert_eq!(storage.get_item("db").unwrap().as_deref(), Some("{\"a\":1}"));

        storage.remove_item("db").unwrap();
        assert_eq!(storage.get_item("db").unwrap(), None);
    }

    #[test]
    fn test_sqlite_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.db");

        {
            let storage = SqliteStorage::open(&path).unwrap();
            storage.set_item("b", "2").unwrap();
            storage.set_item("a", "1").unwrap();
        }

        let storage = SqliteStorage::open(&path).unwrap();
        assert_eq!(storage.keys().unwrap(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(storage.get_item("b").unwrap().as_deref(), Some("2"));
    }
}
