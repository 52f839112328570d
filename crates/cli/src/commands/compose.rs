//! `promptloom compose` — render the bucket into the final prompt.
//!
//! The prompt itself goes to stdout so it can be piped or redirected; the
//! size summary goes to stderr.

use super::CommandResult;
use promptloom_composer::{compose_prompt, create_concise_prompt};
use promptloom_config::AppConfig;
use promptloom_core::state_store::StateStore;

pub fn run(concise: bool, json: bool) -> CommandResult {
    let config = AppConfig::load()?;
    let catalog = super::load_catalog(&config)?;
    let store = super::open_store(&config);
    let state = store.load();

    if !state.bucket.iter().any(|entry| entry.enabled) {
        println!("The bucket has no enabled entries — nothing to compose.");
        return Ok(());
    }

    let result = if concise {
        create_concise_prompt(&state.bucket, catalog.items(), &state.bucket_vars)?
    } else {
        compose_prompt(&state.bucket, catalog.items(), &state.bucket_vars)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.prompt);
        eprintln!();
        eprintln!(
            "{} chars, ~{} tokens{}",
            result.char_count,
            result.estimated_tokens,
            if result.condensed { " (condensed)" } else { "" }
        );
    }
    Ok(())
}
