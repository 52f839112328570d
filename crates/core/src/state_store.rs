//! State repository trait — the load/save boundary for the persisted state.
//!
//! The core and the pure transition functions never touch the storage
//! medium; callers hold the current [`AppState`] snapshot in memory and go
//! through a `StateStore` to read it at session start and write it back
//! after each mutation.
//!
//! Implementations: JSON file, in-memory (for testing).

use crate::bucket::AppState;

/// The state persistence boundary.
pub trait StateStore {
    /// The backend name (e.g., "file", "in_memory").
    fn name(&self) -> &str;

    /// Load the persisted state.
    ///
    /// Never fails: missing or unreadable data degrades to
    /// `AppState::default()`. Implementations log the degradation; callers
    /// cannot observe the difference between "absent" and "corrupt".
    fn load(&self) -> AppState;

    /// Persist the state, best-effort.
    ///
    /// Failures are logged by the implementation and never surfaced — the
    /// in-memory snapshot stays authoritative for the rest of the session.
    fn save(&self, state: &AppState);
}
