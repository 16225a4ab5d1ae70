//! Error types for the core stores.

use thiserror::Error;

/// A store could not be constructed.
///
/// Raised by the builders before any I/O takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// No adapter was supplied.
    #[error("missing adapter")]
    MissingAdapter,

    /// The default data slot was never filled.
    #[error("missing default data")]
    MissingDefaultData,
}

/// Failure of a fallible update.
///
/// `M` is the mutator's error, `A` the adapter's.
#[derive(Debug, Error)]
pub enum UpdateError<M, A> {
    /// The mutator failed. Nothing was written.
    #[error("mutator failed: {0}")]
    Mutator(M),

    /// The mutation succeeded but persisting it failed.
    #[error("adapter error: {0}")]
    Adapter(A),
}

impl<M, A> UpdateError<M, A> {
    /// Returns true if the mutator, not the adapter, failed.
    pub fn is_mutator(&self) -> bool {
        matches!(self, UpdateError::Mutator(_))
    }

    /// The adapter error, if persisting failed.
    pub fn into_adapter(self) -> Option<A> {
        match self {
            UpdateError::Adapter(e) => Some(e),
            UpdateError::Mutator(_) => None,
        }
    }
}
