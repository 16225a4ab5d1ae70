//! The async document store.

use std::sync::Arc;

use tracing::debug;

use crate::adapter::Adapter;
use crate::error::{ConstructionError, UpdateError};

/// An in-memory document persisted through an async [`Adapter`].
///
/// The store starts out holding a clone of the default data. `read()`
/// replaces it with the persisted document, or persists the default when the
/// medium is empty.
///
/// Nothing is serialized across concurrent calls. Mutating methods take
/// `&mut self`; share a store behind a lock if several tasks need it.
pub struct Papaz<T, A> {
    /// The persistence capability. Shared, never owned exclusively.
    adapter: Arc<A>,
    /// The current document.
    data: T,
    /// Fallback used when the medium has nothing persisted.
    default_data: T,
    /// Whether a `read()` has completed.
    hydrated: bool,
}

impl<T, A> Papaz<T, A>
where
    T: Clone + Send + Sync,
    A: Adapter<T>,
{
    /// Create a store over `adapter` with the given default.
    ///
    /// No I/O happens until `read()` or `write()` is called.
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
    pub fn builder() -> PapazBuilder<T, A> {
        PapazBuilder::default()
    }

    /// Hydrate `data` from the adapter.
    ///
    /// If the adapter has nothing persisted, `data` becomes the default and
    /// the default is written back to the medium.
    pub async fn read(&mut self) -> Result<(), A::Error> {
        match self.adapter.read().await? {
            Some(data) => {
                debug!("read persisted document");
                self.data = data;
            }
            None => {
                debug!("nothing persisted, writing default document");
                self.data = self.default_data.clone();
                self.adapter.write(&self.data).await?;
            }
        }
        self.hydrated = true;
        Ok(())
    }

    /// Persist the current `data` verbatim.
    pub async fn write(&self) -> Result<(), A::Error> {
        debug!("writing document");
        self.adapter.write(&self.data).await
    }

    /// Mutate `data` in place, then write it.
    ///
    /// The medium is not re-read first: the mutation applies to whatever is
    /// in memory. A panicking mutator skips the write.
    pub async fn update<F>(&mut self, mutator: F) -> Result<(), A::Error>
    where
        F: FnOnce(&mut T),
    {
        mutator(&mut self.data);
        self.write().await
    }

    /// Like [`update`](Self::update), for mutators that can fail.
    ///
    /// On mutator failure nothing is written, and `data` keeps whatever
    /// partial changes the mutator made.
    pub async fn try_update<E, F>(&mut self, mutator: F) -> Result<(), UpdateError<E, A::Error>>
    where
        F: FnOnce(&mut T) -> Result<(), E>,
    {
        mutator(&mut self.data).map_err(UpdateError::Mutator)?;
        self.write().await.map_err(UpdateError::Adapter)
    }

    /// Replace `data` with a value computed from it, then write it.
    ///
    /// `f` works on a copy: if it panics, `data` is left as it was and
    /// nothing is written.
    pub async fn replace_with<F>(&mut self, f: F) -> Result<(), A::Error>
    where
        F: FnOnce(T) -> T,
    {
        self.data = f(self.data.clone());
        self.write().await
    }

    /// The current document.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Mutable access to the current document. Call `write()` to persist.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Replace the current document without persisting it.
    pub fn set_data(&mut self, data: T) {
        self.data = data;
    }

    /// The default supplied at construction.
    pub fn default_data(&self) -> &T {
        &self.default_data
    }

    /// The adapter this store persists through.
    pub fn adapter(&self) -> &Arc<A> {
        &self.adapter
    }

    /// Whether a `read()` has completed successfully.
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Consume the store, returning the current document.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Builder for [`Papaz`] that reports missing arguments instead of relying
/// on the type system.
///
/// Useful when the adapter and default are assembled from configuration.
pub struct PapazBuilder<T, A> {
    adapter: Option<Arc<A>>,
    default_data: Option<T>,
}

impl<T, A> Default for PapazBuilder<T, A> {
    fn default() -> Self {
        Self {
            adapter: None,
            default_data: None,
        }
    }
}

impl<T, A> PapazBuilder<T, A>
where
    T: Clone + Send + Sync,
    A: Adapter<T>,
{
    /// Set the adapter.
    pub fn adapter(mut self, adapter: A) -> Self {
        self.adapter = Some(Arc::new(adapter));
        self
    }

    /// Set an adapter that is also held elsewhere.
    pub fn shared_adapter(mut self, adapter: Arc<A>) -> Self {
        self.adapter = Some(adapter);
        self
    }

    /// Set the default data.
    pub fn default_data(mut self, default_data: T) -> Self {
        self.default_data = Some(default_data);
        self
    }

    /// Build the store. Performs no I/O.
    pub fn build(self) -> Result<Papaz<T, A>, ConstructionError> {
        let adapter = self.adapter.ok_or(ConstructionError::MissingAdapter)?;
        let default_data = self
            .default_data
            .ok_or(ConstructionError::MissingDefaultData)?;
        Ok(Papaz::with_shared(adapter, default_data))
    }
}
