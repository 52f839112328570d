//! # Promptloom Core
//!
//! Domain types, traits, and error definitions for the Promptloom prompt
//! composer. This crate has **zero framework dependencies** — it defines the
//! data model that all other crates operate on.
//!
//! ## Design Philosophy
//!
//! The catalog is read-only reference data; the bucket is the user's mutable
//! working set; composition is a pure function of both. Persistence is a
//! trait boundary here, implemented in `promptloom-store`, so the core never
//! touches the storage medium.

pub mod bucket;
pub mod catalog;
pub mod error;
pub mod state_store;
pub mod vars;

// Re-export key types at crate root for ergonomics
pub use bucket::{AppState, BucketEntry, BucketPatch};
pub use catalog::{BACKEND_CATEGORY, CatalogItem, find_item};
pub use error::{ComposeError, Error, Result};
pub use state_store::StateStore;
pub use vars::BucketVars;
