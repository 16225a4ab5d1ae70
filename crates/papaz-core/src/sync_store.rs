//! The blocking document store.
//!
//! Mirrors [`Papaz`](crate::Papaz) method for method. Every call runs on the
//! caller's thread and returns once the adapter does.

use std::sync::Arc;

use tracing::debug;

use crate::adapter::SyncAdapter;
use crate::error::{ConstructionError, UpdateError};

/// An in-memory document persisted through a [`SyncAdapter`].
pub struct PapazSync<T, A> {
    adapter: Arc<A>,
    data: T,
    default_data: T,
    hydrated: bool,
}

impl<T, A> PapazSync<T, A>
where
    T: Clone,
    A: SyncAdapter<T>,
{
    /// Create a store over `adapter` with the given default.
    pub fn new(adapter: A, default_data: T) -> Self {
        Self::with_shared(Arc::new(adapter), default_data)
    }

    /// Create a store over an adapter that is also held elsewhere.
    pub fn with_shared(adapter: Arc<A>, default_data: T) -> Self {
        Self {
            adapter,
            data: default_data.clone(),
            default_data,
            hydrated: false,
        }
    }

    /// Start a builder that validates its arguments at runtime.
    pub fn builder() -> PapazSyncBuilder<T, A> {
        PapazSyncBuilder::default()
    }

    /// Hydrate `data` from the adapter, persisting the default if the medium
    /// is empty.
    pub fn read(&mut self) -> Result<(), A::Error> {
        match self.adapter.read()? {
            Some(data) => {
                debug!("read persisted document");
                self.data = data;
            }
            None => {
                debug!("nothing persisted, writing default document");
                self.data = self.default_data.clone();
                self.adapter.write(&self.data)?;
            }
        }
        self.hydrated = true;
        Ok(())
    }

    /// Persist the current `data` verbatim.
    pub fn write(&self) -> Result<(), A::Error> {
        debug!("writing document");
        self.adapter.write(&self.data)
    }

    /// Mutate `data` in place, then write it. Does not re-read the medium.
    pub fn update<F>(&mut self, mutator: F) -> Result<(), A::Error>
    where
        F: FnOnce(&mut T),
    {
        mutator(&mut self.data);
        self.write()
    }

    /// Like [`update`](Self::update), for mutators that can fail. On mutator
    /// failure nothing is written.
    pub fn try_update<E, F>(&mut self, mutator: F) -> Result<(), UpdateError<E, A::Error>>
    where
        F: FnOnce(&mut T) -> Result<(), E>,
    {
        mutator(&mut self.data).map_err(UpdateError::Mutator)?;
        self.write().map_err(UpdateError::Adapter)
    }

    /// Replace `data` with a value computed from it, then write it.
    ///
    /// `f` works on a copy: if it panics, `data` is left as it was and
    /// nothing is written.
    pub fn replace_with<F>(&mut self, f: F) -> Result<(), A::Error>
    where
        F: FnOnce(T) -> T,
    {
        self.data = f(self.data.clone());
        self.write()
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    pub fn set_data(&mut self, data: T) {
        self.data = data;
    }

    pub fn default_data(&self) -> &T {
        &self.default_data
    }

    pub fn adapter(&self) -> &Arc<A> {
        &self.adapter
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

/// Builder for [`PapazSync`]. See [`PapazBuilder`](crate::PapazBuilder).
pub struct PapazSyncBuilder<T, A> {
    adapter: Option<Arc<A>>,
    default_data: Option<T>,
}

impl<T, A> Default for PapazSyncBuilder<T, A> {
    fn default() -> Self {
        Self {
            adapter: None,
            default_data: None,
        }
    }
}

impl<T, A> PapazSyncBuilder<T, A>
where
    T: Clone,
    A: SyncAdapter<T>,
{
    pub fn adapter(mut self, adapter: A) -> Self {
        self.adapter = Some(Arc::new(adapter));
        self
    }

    pub fn shared_adapter(mut self, adapter: Arc<A>) -> Self {
        self.adapter = Some(adapter);
        self
    }

    pub fn default_data(mut self, default_data: T) -> Self {
        self.default_data = Some(default_data);
        self
    }

    /// Build the store. Performs no I/O.
    pub fn build(self) -> Result<PapazSync<T, A>, ConstructionError> {
        let adapter = self.adapter.ok_or(ConstructionError::MissingAdapter)?;
        let default_data = self
            .default_data
            .ok_or(ConstructionError::MissingDefaultData)?;
        Ok(PapazSync::with_shared(adapter, default_data))
    }
}
