//! Web-storage adapters: one JSON document under one key of a
//! [`KeyValueStorage`].
//!
//! Storage areas are synchronous, so only [`SyncAdapter`] is implemented.

use std::marker::PhantomData;

use papaz_core::SyncAdapter;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::trace;

use crate::error::{AdapterError, Result};
use crate::sqlite::SqliteStorage;
use crate::storage::{KeyValueStorage, SessionStorageArea};

/// A document stored as compact JSON under `key`.
pub struct WebStorage<T, S> {
    storage: S,
    key: String,
    _doc: PhantomData<fn() -> T>,
}

/// Persistent storage backed by SQLite.
pub type LocalStorage<T> = WebStorage<T, SqliteStorage>;

/// Process-lifetime storage backed by an in-memory area.
pub type SessionStorage<T> = WebStorage<T, SessionStorageArea>;

impl<T, S: KeyValueStorage> WebStorage<T, S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            _doc: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<T> LocalStorage<T> {
    /// Open (or create) the SQLite database at `path` and use `key` in it.
    pub fn open(path: impl AsRef<std::path::Path>, key: impl Into<String>) -> Result<Self> {
        Ok(Self::new(SqliteStorage::open(path)?, key))
    }
}

impl<T, S> SyncAdapter<T> for WebStorage<T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStorage,
{
    type Error = AdapterError;

    fn read(&self) -> Result<Option<T>> {
        trace!(key = %self.key, "web storage read");
        match self.storage.get_item(&self.key)? {
            Some(value) => Ok(Some(serde_json::from_str(&value)?)),
            None => Ok(None),
        }
    }

    fn write(&self, data: &T) -> Result<()> {
        trace!(key = %self.key, "web storage write");
        let value = serde_json::to_string(data)?;
        self.storage.set_item(&self.key, &value)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    type Doc = BTreeMap<String, i64>;

    #[test]
    fn test_session_storage_missing_key_is_none() {
        let adapter = SessionStorage::<Doc>::new(SessionStorageArea::new(), "db");
        assert_eq!(adapter.read().unwrap(), None);
    }

    #[test]
    fn test_session_storage_writes_compact_json() {
        let area = SessionStorageArea::new();
        let adapter = SessionStorage::<Doc>::new(area.clone(), "db");

        let mut doc = Doc::new();
        doc.insert("a".into(), 1);
        adapter.write(&doc).unwrap();

        assert_eq!(area.get_item("db").unwrap().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_keys_do_not_cross() {
        let area = SessionStorageArea::new();
        let first = SessionStorage::<Doc>::new(area.clone(), "first");
        let second = SessionStorage::<Doc>::new(area, "second");

        first.write(&Doc::from([("x".to_string(), 1)])).unwrap();

        assert_eq!(second.read().unwrap(), None);
    }

    #[test]
    fn test_malformed_value_is_error() {
        let area = SessionStorageArea::new();
        area.set_item("db", "not json").unwrap();

        let err = SessionStorage::<Doc>::new(area, "db").read().unwrap_err();
        assert!(matches!(err, AdapterError::Json(_)));
    }

    #[test]
    fn test_local_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.db");

        LocalStorage::<Doc>::open(&path, "db")
            .unwrap()
            .write(&Doc::from([("b".to_string(), 2)]))
            .unwrap();

        let reopened = LocalStorage::<Doc>::open(&path, "db").unwrap();
        assert_eq!(reopened.read().unwrap(), Some(Doc::from([("b".to_string(), 2)])));
    }
}
