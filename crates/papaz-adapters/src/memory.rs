//! In-memory adapters.
//!
//! The value lives in process memory and is lost when the last handle is
//! dropped. Clones share the same slot, so a clone acts as a second view of
//! the same medium.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use papaz_core::{Adapter, SyncAdapter};
use tracing::trace;

use crate::error::{AdapterError, Result};

/// Shared slot behind both memory adapters.
#[derive(Debug)]
struct Slot<T> {
    value: Arc<RwLock<Option<T>>>,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
        }
    }
}

impl<T: Clone> Slot<T> {
    fn new(value: Option<T>) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
        }
    }

    fn get(&self) -> Result<Option<T>> {
        let value = self
            .value
            .read()
            .map_err(|e| AdapterError::Poisoned(e.to_string()))?;
        Ok(value.clone())
    }

    fn set(&self, data: &T) -> Result<()> {
        let mut value = self
            .value
            .write()
            .map_err(|e| AdapterError::Poisoned(e.to_string()))?;
        *value = Some(data.clone());
        Ok(())
    }
}

/// Async in-memory adapter.
#[derive(Debug)]
pub struct Memory<T> {
    slot: Slot<T>,
}

impl<T: Clone> Memory<T> {
    /// Create an empty medium. The first `read()` reports nothing persisted.
    pub fn new() -> Self {
        Self {
            slot: Slot::new(None),
        }
    }

    /// Create a medium that already holds `data`.
    pub fn with_data(data: T) -> Self {
        Self {
            slot: Slot::new(Some(data)),
        }
    }

    /// Inspect the medium without going through a store.
    pub fn snapshot(&self) -> Result<Option<T>> {
        self.slot.get()
    }
}

impl<T: Clone> Default for Memory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Memory<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

#[async_trait]
impl<T> Adapter<T> for Memory<T>
where
    T: Clone + Send + Sync,
{
    type Error = AdapterError;

    async fn read(&self) -> Result<Option<T>> {
        trace!("memory read");
        self.slot.get()
    }

    async fn write(&self, data: &T) -> Result<()> {
        trace!("memory write");
        self.slot.set(data)
    }
}

/// Blocking in-memory adapter.
#[derive(Debug)]
pub struct MemorySync<T> {
    slot: Slot<T>,
}

impl<T: Clone> MemorySync<T> {
    pub fn new() -> Self {
        Self {
            slot: Slot::new(None),
        }
    }

    pub fn with_data(data: T) -> Self {
        Self {
            slot: Slot::new(Some(data)),
        }
    }

    pub fn snapshot(&self) -> Result<Option<T>> {
        self.slot.get()
    }
}

impl<T: Clone> Default for MemorySync<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MemorySync<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T: Clone> SyncAdapter<T> for MemorySync<T> {
    type Error = AdapterError;

    fn read(&self) -> Result<Option<T>> {
        trace!("memory read");
        self.slot.get()
    }

    fn write(&self, data: &T) -> Result<()> {
        trace!("memory write");
        self.slot.set(data)
    }
}
