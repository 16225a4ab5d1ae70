//! Error types for presets.

use papaz_adapters::AdapterError;
use papaz_core::ConstructionError;
use thiserror::Error;

/// Errors that can occur while setting up a store through a preset.
#[derive(Debug, Error)]
pub enum PresetError {
    /// The store could not be constructed.
    #[error("construction error: {0}")]
    Construction(#[from] ConstructionError),

    /// The adapter failed to open, read or write its medium.
    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

/// Result type for preset operations.
pub type Result<T> = std::result::Result<T, PresetError>;
