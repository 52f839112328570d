//! Insertion timestamp source.
//!
//! Bucket entries are ordered by their insertion timestamp, so the clock
//! must never run backwards within a process even if the wall clock does.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Current wall-clock time in milliseconds, clamped to be non-decreasing
/// across calls. Ties are possible under rapid successive calls.
pub fn now_millis() -> i64 {
    let wall = Utc::now().timestamp_millis();
    let prev = LAST_MILLIS.fetch_max(wall, Ordering::SeqCst);
    prev.max(wall)
}
