//! In-memory store — keeps the serialized blob in memory, for tests and
//! ephemeral sessions.
//!
//! Deliberately stores the *encoded* document rather than the value, so it
//! exercises the same serialization path as the file store and lets tests
//! inject corrupt blobs.

use promptloom_core::bucket::AppState;
use promptloom_core::state_store::StateStore;
use std::sync::Mutex;
use tracing::warn;

/// A state store over an in-memory JSON blob.
pub struct InMemoryStore {
    blob: Mutex<Option<String>>,
}

impl InMemoryStore {
    /// Create an empty store: the first `load` yields the default state.
    pub fn new() -> Self {
        Self {
            blob: Mutex::new(None),
        }
    }

    /// Create a store pre-seeded with a raw blob (valid or not).
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.blob.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for InMemoryStore {
    fn name(&self) -> &str {
        "in_memory"
    }

    fn load(&self) -> AppState {
        let blob = self.lock();
        let Some(content) = blob.as_deref() else {
            return AppState::default();
        };
        match serde_json::from_str(content) {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "Stored state unreadable, starting fresh");
                AppState::default()
            }
        }
    }

    fn save(&self, state: &AppState) {
        match serde_json::to_string(state) {
            Ok(json) => *self.lock() = Some(json),
            Err(e) => warn!(error = %e, "Failed to serialize state"),
        }
    }
}
