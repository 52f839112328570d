//! `promptloom add/remove/update/list/reorder` — bucket management.
//!
//! Every mutation loads the current snapshot, applies a pure transition, and
//! persists the result before reporting.

use super::CommandResult;
use promptloom_config::AppConfig;
use promptloom_core::bucket::BucketPatch;
use promptloom_core::state_store::StateStore;
use promptloom_store::ops;

pub fn add(item_id: &str, intent: &str) -> CommandResult {
    let config = AppConfig::load()?;
    let catalog = super::load_catalog(&config)?;

    let Some(item) = catalog.get(item_id) else {
        return Err(format!("Unknown catalog item: {item_id}").into());
    };

    let store = super::open_store(&config);
    let state = store.load();
    let next = ops::add_to_bucket(&state, item_id, intent);
    store.save(&next);

    println!("➕ Added {} ({} entries in the bucket)", item.title, next.bucket.len());
    Ok(())
}

pub fn remove(item_id: &str) -> CommandResult {
    let config = AppConfig::load()?;
    let store = super::open_store(&config);
    let state = store.load();

    let next = ops::remove_from_bucket(&state, item_id);
    let removed = state.bucket.len() - next.bucket.len();
    if removed == 0 {
        println!("Nothing to remove: no bucket entries for '{item_id}'");
        return Ok(());
    }

    store.save(&next);
    println!("🗑️  Removed {removed} entr{} for '{item_id}'", if removed == 1 { "y" } else { "ies" });
    Ok(())
}

pub fn update(
    item_id: &str,
    intent: Option<String>,
    enable: bool,
    disable: bool,
    primary: Option<bool>,
) -> CommandResult {
    let enabled = match (enable, disable) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    let patch = BucketPatch {
        intent,
        primary,
        enabled,
        added_at: None,
    };
    if patch == BucketPatch::default() {
        return Err("Nothing to update: pass --intent, --enable/--disable, or --primary".into());
    }

    let config = AppConfig::load()?;
    let store = super::open_store(&config);
    let state = store.load();

    let matching = state.bucket.iter().filter(|e| e.id == item_id).count();
    if matching == 0 {
        println!("No bucket entries for '{item_id}'");
        return Ok(());
    }

    let next = ops::update_bucket_item(&state, item_id, &patch);
    store.save(&next);
    println!("✏️  Updated {matching} entr{} for '{item_id}'", if matching == 1 { "y" } else { "ies" });
    Ok(())
}

pub fn list() -> CommandResult {
    let config = AppConfig::load()?;
    let store = super::open_store(&config);
    let state = store.load();

    if state.bucket.is_empty() {
        println!("🧺 Bucket is empty. Add items with `promptloom add <item-id> --intent \"...\"`");
        return Ok(());
    }

    println!("🧺 Bucket ({} entries)", state.bucket.len());
    for (index, entry) in state.bucket.iter().enumerate() {
        let marker = if entry.enabled { "[x]" } else { "[ ]" };
        let primary = if entry.primary { " (primary)" } else { "" };
        println!(
            "  {:>2}. {} {} — \"{}\"{}",
            index + 1,
            marker,
            entry.id,
            entry.intent,
            primary
        );
    }
    Ok(())
}

pub fn reorder(positions: &[usize]) -> CommandResult {
    let config = AppConfig::load()?;
    let store = super::open_store(&config);
    let state = store.load();

    if positions.len() != state.bucket.len() {
        return Err(format!(
            "Expected {} positions (one per bucket entry), got {}",
            state.bucket.len(),
            positions.len()
        )
        .into());
    }

    let mut new_order = Vec::with_capacity(positions.len());
    let mut used = vec![false; state.bucket.len()];
    for &position in positions {
        if position == 0 || position > state.bucket.len() {
            return Err(format!("Position {position} is out of range").into());
        }
        if used[position - 1] {
            return Err(format!("Position {position} given twice").into());
        }
        used[position - 1] = true;
        new_order.push(state.bucket[position - 1].clone());
    }

    let next = ops::reorder_bucket_items(&state, new_order);
    store.save(&next);
    println!("🔀 Reordered the bucket (composition order still follows insertion time)");
    Ok(())
}
