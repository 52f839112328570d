//! JSON-file state store — one compact JSON document at a fixed path.
//!
//! Storage location: `~/.promptloom/state.json`
//!
//! The document shape is the serialized [`AppState`]; serialization is
//! order-preserving, so an untouched load/save cycle reproduces the stored
//! bytes exactly.

use promptloom_core::bucket::AppState;
use promptloom_core::state_store::StateStore;
use std::path::PathBuf;
use tracing::{debug, warn};

/// A file-backed state store.
///
/// Reads happen on every `load`, writes on every `save`; there is no cache.
/// The state is small (tens of entries), so rereading is cheaper than
/// keeping the file and memory in sync.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given path. The file need not exist yet.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default path: `~/.promptloom/state.json`
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".promptloom").join("state.json")
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn write(&self, state: &AppState) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(state).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, json)
    }
}

impl StateStore for FileStore {
    fn name(&self) -> &str {
        "file"
    }

    fn load(&self) -> AppState {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(_) => {
                debug!(path = %self.path.display(), "No stored state, starting fresh");
                return AppState::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "Stored state unreadable, starting fresh");
                AppState::default()
            }
        }
    }

    fn save(&self, state: &AppState) {
        if let Err(e) = self.write(state) {
            warn!(error = %e, path = %self.path.display(), "Failed to persist state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::add_to_bucket_at;
    use promptloom_core::vars::BucketVars;

    fn temp_store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("state.json"));
        (dir, store)
    }

    #[test]
    fn missing_file_loads_default_state() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load(), AppState::default());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let (_dir, store) = temp_store();
        let state = add_to_bucket_at(&AppState::default(), "product-card", "hero", 1000);

        store.save(&state);
        assert_eq!(store.load(), state);
    }

    #[test]
    fn untouched_state_rewrites_identical_bytes() {
        let (_dir, store) = temp_store();
        let mut state = add_to_bucket_at(&AppState::default(), "product-card", "hero", 1000);
        state.bucket_vars = BucketVars {
            database: Some("Postgres".into()),
            ..BucketVars::default()
        };
        store.save(&state);
        let first = std::fs::read(store.path()).unwrap();

        store.save(&store.load());
        let second = std::fs::read(store.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn corrupt_file_loads_default_state() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), "this is not json").unwrap();
        assert_eq!(store.load(), AppState::default());
    }

    #[test]
    fn partial_blob_merges_over_defaults() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), r#"{"bucket":[{"id":"card","intent":"x","primary":false,"enabled":true,"addedAt":1}]}"#)
            .unwrap();

        let state = store.load();
        assert_eq!(state.bucket.len(), 1);
        assert_eq!(state.bucket_vars, BucketVars::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("deeper").join("state.json"));

        store.save(&AppState::default());
        assert!(store.path().exists());
    }
}
