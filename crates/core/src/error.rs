//! Error types for the Promptloom domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for Promptloom operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Composition errors ---
    #[error("Compose error: {0}")]
    Compose(#[from] ComposeError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Errors raised while composing a prompt from the bucket.
///
/// These are data-integrity errors, not transient conditions: the call fails
/// as a whole and no partial document is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// A bucket entry references an id with no catalog item behind it.
    #[error("Catalog item not found: {0}")]
    ItemNotFound(String),
}
