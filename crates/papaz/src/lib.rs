//! # Papaz
//!
//! A single structured value, persisted. Hold a document in memory, hydrate
//! it from a medium, mutate it, flush it back.
//!
//! ## Overview
//!
//! - **Stores**: [`Papaz`] (async) and [`PapazSync`] (blocking) keep the
//!   document and implement `read` / `write` / `update`
//! - **Adapters**: memory, text/JSON/CBOR files, and web-storage slots
//!   (SQLite-backed local storage, in-memory session storage)
//! - **Presets**: one call that picks an adapter, builds the store and
//!   hydrates it
//!
//! ## Usage
//!
//! ```rust,no_run
//! use papaz::presets::json_file_preset;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Default, Serialize, Deserialize)]
//! struct Data {
//!     posts: Vec<String>,
//! }
//!
//! async fn example() -> papaz::Result<()> {
//!     let mut db = json_file_preset("db.json", Data::default()).await?;
//!
//!     db.update(|data| data.posts.push("hello world".into())).await?;
//!
//!     println!("{} posts", db.data().posts.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `papaz::core` - stores and adapter traits
//! - `papaz::adapters` - built-in adapters

pub mod config;
pub mod error;
pub mod presets;

pub use papaz_adapters as adapters;
pub use papaz_core as core;

pub use config::{Environment, PresetConfig};
pub use error::{PresetError, Result};
pub use presets::{DynAdapter, DynSyncAdapter};

pub use papaz_adapters::{
    AdapterError, CborFile, CborFileSync, DataFile, DataFileSync, JsonFile, JsonFileSync,
    LocalStorage, Memory, MemorySync, SessionStorage, SessionStorageArea, TextFile, TextFileSync,
};
pub use papaz_core::{
    Adapter, ConstructionError, Papaz, PapazBuilder, PapazSync, PapazSyncBuilder, SyncAdapter,
    UpdateError,
};
