//! Pure state transitions over the bucket.
//!
//! Every operation borrows a state snapshot and returns a new value; the
//! input is never mutated. Callers compare snapshots to decide whether to
//! persist and re-render, so entries untouched by an operation keep their
//! values bit-for-bit.
//!
//! All operations are total: no input makes them fail.

use crate::clock;
use promptloom_core::bucket::{AppState, BucketEntry, BucketPatch};
use promptloom_core::vars::BucketVars;

/// Append a new entry for `item_id` at the end of the bucket.
///
/// No uniqueness check: the same catalog item may be added any number of
/// times, each occurrence with its own intent and enablement.
pub fn add_to_bucket(state: &AppState, item_id: &str, intent: &str) -> AppState {
    add_to_bucket_at(state, item_id, intent, clock::now_millis())
}

/// [`add_to_bucket`] with an explicit timestamp, for deterministic callers.
pub fn add_to_bucket_at(state: &AppState, item_id: &str, intent: &str, added_at: i64) -> AppState {
    let mut bucket = state.bucket.clone();
    bucket.push(BucketEntry {
        id: item_id.to_string(),
        intent: intent.to_string(),
        primary: false,
        enabled: true,
        added_at,
    });
    AppState {
        bucket,
        bucket_vars: state.bucket_vars.clone(),
    }
}

/// Shallow-merge `patch` over **every** entry whose id equals `item_id`.
///
/// Matching is by id only — with duplicate entries for the same catalog
/// item, all of them receive the patch. Entries with other ids are carried
/// over unchanged.
pub fn update_bucket_item(state: &AppState, item_id: &str, patch: &BucketPatch) -> AppState {
    let bucket = state
        .bucket
        .iter()
        .map(|entry| {
            if entry.id == item_id {
                patch.apply(entry)
            } else {
                entry.clone()
            }
        })
        .collect();
    AppState {
        bucket,
        bucket_vars: state.bucket_vars.clone(),
    }
}

/// Remove every entry whose id equals `item_id`.
///
/// Removing an id with no entries is a no-op that still returns a fresh,
/// equivalent state.
pub fn remove_from_bucket(state: &AppState, item_id: &str) -> AppState {
    let bucket = state
        .bucket
        .iter()
        .filter(|entry| entry.id != item_id)
        .cloned()
        .collect();
    AppState {
        bucket,
        bucket_vars: state.bucket_vars.clone(),
    }
}

/// Replace the bucket sequence wholesale with `new_order`.
///
/// The caller is trusted to supply a permutation of the existing entries;
/// no validation is performed. Timestamps are not rewritten, so this changes
/// display/storage order only — composition order still follows `added_at`.
pub fn reorder_bucket_items(state: &AppState, new_order: Vec<BucketEntry>) -> AppState {
    AppState {
        bucket: new_order,
        bucket_vars: state.bucket_vars.clone(),
    }
}

/// Replace the variable environment.
pub fn set_bucket_vars(state: &AppState, vars: BucketVars) -> AppState {
    AppState {
        bucket: state.bucket.clone(),
        bucket_vars: vars,
    }
}
