//! Adapter traits: the read/write capability a store persists through.
//!
//! An adapter owns exactly one slot on some medium (a file, a storage key,
//! a cell in memory). Stores only ever call these two methods.

use async_trait::async_trait;

/// Async persistence for a single document of type `T`.
///
/// # Contract
///
/// - `read` returns `Ok(None)` when nothing has been persisted yet. That is
///   not an error. Malformed content, missing permissions or an unavailable
///   medium are errors.
/// - `write` replaces whatever was stored. A reader using the same adapter
///   never observes a partially written value.
/// - A value written must come back structurally unchanged from `read`.
#[async_trait]
pub trait Adapter<T>: Send + Sync {
    /// The error surfaced by this adapter. Stores pass it through unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the persisted document, or `None` if there is none.
    async fn read(&self) -> Result<Option<T>, Self::Error>;

    /// Persist `data`, replacing the previous document.
    async fn write(&self, data: &T) -> Result<(), Self::Error>;
}

/// Blocking persistence for a single document of type `T`.
///
/// Same contract as [`Adapter`], for media that are naturally synchronous.
pub trait SyncAdapter<T> {
    /// The error surfaced by this adapter.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the persisted document, or `None` if there is none.
    fn read(&self) -> Result<Option<T>, Self::Error>;

    /// Persist `data`, replacing the previous document.
    fn write(&self, data: &T) -> Result<(), Self::Error>;
}

#[async_trait]
impl<T, A> Adapter<T> for Box<A>
where
    T: Send + Sync + 'static,
    A: Adapter<T> + ?Sized,
{
    type Error = A::Error;

    async fn read(&self) -> Result<Option<T>, Self::Error> {
        (**self).read().await
    }

    async fn write(&self, data: &T) -> Result<(), Self::Error> {
        (**self).write(data).await
    }
}

impl<T, A> SyncAdapter<T> for Box<A>
where
    A: SyncAdapter<T> + ?Sized,
{
    type Error = A::Error;

    fn read(&self) -> Result<Option<T>, Self::Error> {
        (**self).read()
    }

    fn write(&self, data: &T) -> Result<(), Self::Error> {
        (**self).write(data)
    }
}
