//! Key/value storage: the string-keyed medium behind [`WebStorage`].
//!
//! Modeled on the browser's `Storage` interface: string keys, string values,
//! synchronous access.
//!
//! [`WebStorage`]: crate::WebStorage

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{AdapterError, Result};

/// A synchronous string-keyed storage area.
pub trait KeyValueStorage {
    /// Get the value for `key`, or `None` if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Set `key` to `value`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;

    /// All keys currently present, in no particular order.
    fn keys(&self) -> Result<Vec<String>>;
}

/// In-memory storage area that lives as long as any handle to it.
///
/// Clones share the same area, like two scripts on the same page sharing
/// `sessionStorage`.
#[derive(Debug, Clone, Default)]
pub struct SessionStorageArea {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl SessionStorageArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys in the area.
    pub fn len(&self) -> Result<usize> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> AdapterError {
    AdapterError::Poisoned(e.to_string())
}

impl KeyValueStorage for SessionStorageArea {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.write().map_err(poisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.write().map_err(poisoned)?;
        items.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_area_basic() {
        let area = SessionStorageArea::new();
        assert!(area.is_empty().unwrap());

        area.set_item("k", "v1").unwrap();
        area.set_item("k", "v2").unwrap();
        assert_eq!(area.get_item("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(area.len().unwrap(), 1);

        area.remove_item("k").unwrap();
        area.remove_item("k").unwrap();
        assert_eq!(area.get_item("k").unwrap(), None);
    }

    #[test]
    fn test_session_area_clones_share() {
        let area = SessionStorageArea::new();
        let other = area.clone();

        other.set_item("shared", "yes").unwrap();
        assert_eq!(area.keys().unwrap(), vec!["shared".to_string()]);
    }

    #[test]
    fn test_poisoned_area_reports_error() {
        let area = SessionStorageArea::new();
        let items = Arc::clone(&area.items);
        let _ = std::thread::spawn(move || {
            let _guard = items.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert!(matches!(area.len(), Err(AdapterError::Poisoned(_))));
        assert!(matches!(area.is_empty(), Err(AdapterError::Poisoned(_))));
        assert!(matches!(area.get_item("k"), Err(AdapterError::Poisoned(_))));
    }
}
