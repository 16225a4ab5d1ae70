//! # Papaz Core
//!
//! A single persisted document held in memory and flushed through a
//! pluggable adapter.
//!
//! ## Overview
//!
//! The core is two small stores with the same contract:
//!
//! - [`Papaz`] - the async store, backed by an [`Adapter`]
//! - [`PapazSync`] - the blocking store, backed by a [`SyncAdapter`]
//!
//! Both keep the current document in `data`, hydrate it with `read()`, flush
//! it with `write()`, and offer `update()` as mutate-then-write sugar. The
//! stores never look inside the document and never know which medium backs
//! the adapter.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use papaz_core::Papaz;
//!
//! async fn example<A: papaz_core::Adapter<Vec<String>>>(adapter: A) -> Result<(), A::Error> {
//!     let mut db = Papaz::new(adapter, Vec::new());
//!     db.read().await?;
//!
//!     db.update(|todos| todos.push("write docs".into())).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Hydrate-or-default**: if the adapter reports nothing persisted yet,
//!   `read()` adopts the default and writes it back to the medium.
//! - **No re-read on update**: `update()` mutates the in-memory document and
//!   writes it; it does not reload the medium first.
//! - **Errors pass through**: adapter errors reach the caller unchanged.
//! - **Construction checks**: trait bounds check the adapter at compile time;
//!   the builders check for missing arguments at runtime, before any I/O.

pub mod adapter;
pub mod error;
pub mod store;
pub mod sync_store;

pub use adapter::{Adapter, SyncAdapter};
pub use error::{ConstructionError, UpdateError};
pub use store::{Papaz, PapazBuilder};
pub use sync_store::{PapazSync, PapazSyncBuilder};
