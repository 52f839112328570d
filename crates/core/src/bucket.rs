//! Bucket state model — the user's ordered working set of catalog selections.
//!
//! A bucket entry references a catalog item by id. Ids are a foreign key, not
//! a primary key: the same catalog item may appear in the bucket any number
//! of times, each occurrence with its own intent and enablement. The bucket
//! is therefore an indexed list, never a map keyed by id.

use crate::vars::BucketVars;
use serde::{Deserialize, Serialize};

/// One selected catalog item plus its per-selection metadata.
///
/// `added_at` is the composition sort key: the composer orders instruction
/// lines by it, ascending, independent of the entry's position in the bucket
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketEntry {
    /// Catalog item id this entry refers to.
    pub id: String,

    /// Free-text answer to "How will you use it?".
    pub intent: String,

    /// User-settable priority flag. Carried and persisted, but composition
    /// currently ignores it.
    pub primary: bool,

    /// Only enabled entries participate in composition.
    pub enabled: bool,

    /// Insertion timestamp in wall-clock milliseconds, non-decreasing within
    /// a process.
    #[serde(rename = "addedAt")]
    pub added_at: i64,
}

/// A shallow partial update for [`BucketEntry`].
///
/// `None` fields leave the entry's value untouched. `added_at` is patchable:
/// that is the one sanctioned way for a caller to change an entry's position
/// in the composed instruction order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, rename = "addedAt", skip_serializing_if = "Option::is_none")]
    pub added_at: Option<i64>,
}

impl BucketPatch {
    /// Shallow-merge this patch over an entry, producing a new entry.
    pub fn apply(&self, entry: &BucketEntry) -> BucketEntry {
        BucketEntry {
            id: entry.id.clone(),
            intent: self.intent.clone().unwrap_or_else(|| entry.intent.clone()),
            primary: self.primary.unwrap_or(entry.primary),
            enabled: self.enabled.unwrap_or(entry.enabled),
            added_at: self.added_at.unwrap_or(entry.added_at),
        }
    }
}

/// The persisted aggregate: the bucket sequence plus the variable
/// environment.
///
/// Both fields default individually, so a partial stored blob merges over
/// the defaults on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub bucket: Vec<BucketEntry>,

    #[serde(default, rename = "bucketVars")]
    pub bucket_vars: BucketVars,
}
