//! Catalog loading and lookup for Promptloom.
//!
//! The catalog is read-only and loaded once per process: the built-in
//! component set, or a JSON file supplied by the user. Item ids must be
//! unique within a catalog — bucket entries reference them as a foreign key.

pub mod builtin;
pub mod suggest;

use promptloom_core::catalog::{CatalogItem, find_item};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// An immutable collection of catalog items.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Wrap an item list without validation. Callers own the uniqueness
    /// guarantee; loaded catalogs go through [`Catalog::from_json`] instead.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// The built-in component set.
    pub fn builtin() -> Self {
        Self::new(builtin::items())
    }

    /// Load a catalog from a JSON file (an array of items).
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let catalog = Self::from_json(&content).map_err(|e| match e {
            CatalogError::ParseError { reason, .. } => CatalogError::ParseError {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })?;

        debug!(path = %path.display(), count = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Parse a catalog from a JSON array and validate id uniqueness.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<CatalogItem> =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
                path: PathBuf::from("<inline>"),
                reason: e.to_string(),
            })?;
        validate(&items)?;
        Ok(Self::new(items))
    }

    /// First item with the given id, if any.
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        find_item(&self.items, id)
    }

    /// All items, in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Reject catalogs with duplicate ids.
fn validate(items: &[CatalogItem]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(CatalogError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse catalog at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Duplicate catalog item id: {0}")]
    DuplicateId(String),
}
