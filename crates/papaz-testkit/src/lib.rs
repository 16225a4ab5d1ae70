//! # Papaz Testkit
//!
//! Testing utilities for Papaz stores and adapters.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: temporary JSON files and a small typed document
//! - **Media**: every built-in medium behind one [`Medium`] trait, with async
//!   stores driven to completion so scenarios are written once
//! - **Suite**: the conformance scenarios every store/medium pair must pass
//! - **Generators**: proptest strategies for documents and mutations
//!
//! ## Conformance
//!
//! ```rust
//! use papaz_testkit::{medium::all_media, suite};
//!
//! suite::run_all(all_media);
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use papaz_testkit::{generators::document, medium::{Flavor, MemoryMedium}, suite};
//!
//! proptest! {
//!     #[test]
//!     fn round_trip(doc in document()) {
//!         suite::round_trips_through_fresh_store(&MemoryMedium::new(Flavor::Sync), doc);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod medium;
pub mod suite;

pub use fixtures::{Data, Doc, TempJsonFile};
pub use generators::{document, mutation, Mutation};
pub use medium::{all_media, Flavor, Medium, StoreHandle};
