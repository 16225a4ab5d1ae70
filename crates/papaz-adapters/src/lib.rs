//! # Papaz Adapters
//!
//! Concrete [`Adapter`](papaz_core::Adapter) and
//! [`SyncAdapter`](papaz_core::SyncAdapter) implementations.
//!
//! ## Key Types
//!
//! - [`Memory`] / [`MemorySync`] - a value held in process memory
//! - [`TextFile`] / [`TextFileSync`] - a raw string document on disk
//! - [`DataFile`] / [`DataFileSync`] - a document encoded by a [`Codec`]
//! - [`JsonFile`] / [`JsonFileSync`] - pretty-printed JSON on disk
//! - [`CborFile`] / [`CborFileSync`] - CBOR on disk
//! - [`WebStorage`] - one key in a [`KeyValueStorage`], with the
//!   [`LocalStorage`] (SQLite) and [`SessionStorage`] (in-memory) flavors
//!
//! ## Usage
//!
//! ```rust,no_run
//! use papaz_adapters::JsonFileSync;
//! use papaz_core::PapazSync;
//!
//! let adapter = JsonFileSync::<Vec<String>>::new("db.json");
//! let mut db = PapazSync::new(adapter, Vec::new());
//! db.read().unwrap();
//! db.update(|posts| posts.push("hello".into())).unwrap();
//! ```
//!
//! ## Design Notes
//!
//! - **NOT_FOUND is not an error**: a missing file, a blank file or a missing
//!   storage key reads as `Ok(None)`.
//! - **Atomic replace**: file writes go to a sibling temp file that is synced
//!   and renamed over the target.
//! - **Blocking work off the runtime**: async file adapters run file I/O on
//!   tokio's blocking pool.

pub mod codec;
pub mod data_file;
pub mod error;
pub mod fs;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod storage;
pub mod text_file;
pub mod web_storage;

pub use codec::{CborCodec, Codec, JsonCodec};
pub use data_file::{CborFile, CborFileSync, DataFile, DataFileSync, JsonFile, JsonFileSync};
pub use error::{AdapterError, Result};
pub use memory::{Memory, MemorySync};
pub use sqlite::SqliteStorage;
pub use storage::{KeyValueStorage, SessionStorageArea};
pub use text_file::{TextFile, TextFileSync};
pub use web_storage::{LocalStorage, SessionStorage, WebStorage};
