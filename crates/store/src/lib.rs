//! Bucket store for Promptloom — pure state transitions plus the
//! persistence backends behind the [`StateStore`] trait.
//!
//! [`StateStore`]: promptloom_core::StateStore

pub mod clock;
pub mod file;
pub mod in_memory;
pub mod ops;

pub use file::FileStore;
pub use in_memory::InMemoryStore;
pub use ops::{
    add_to_bucket, add_to_bucket_at, remove_from_bucket, reorder_bucket_items, set_bucket_vars,
    update_bucket_item,
};
