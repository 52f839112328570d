//! `promptloom vars` — show or set the template variables.

use super::CommandResult;
use promptloom_config::AppConfig;
use promptloom_core::state_store::StateStore;
use promptloom_store::ops;

pub fn run(
    framework: Option<String>,
    language: Option<String>,
    style: Option<String>,
    database: Option<String>,
    platform: Option<String>,
) -> CommandResult {
    let config = AppConfig::load()?;
    let store = super::open_store(&config);
    let state = store.load();

    let nothing_to_set = framework.is_none()
        && language.is_none()
        && style.is_none()
        && database.is_none()
        && platform.is_none();

    if nothing_to_set {
        let vars = &state.bucket_vars;
        println!("🔧 Template variables");
        println!("  framework: {}", vars.framework);
        println!("  language:  {}", vars.language);
        println!("  style:     {}", vars.style);
        println!("  database:  {}", vars.database.as_deref().unwrap_or("(unset)"));
        println!("  platform:  {}", vars.platform.as_deref().unwrap_or("(unset)"));
        return Ok(());
    }

    let mut vars = state.bucket_vars.clone();
    if let Some(value) = framework {
        vars.framework = value;
    }
    if let Some(value) = language {
        vars.language = value;
    }
    if let Some(value) = style {
        vars.style = value;
    }
    if let Some(value) = database {
        vars.database = Some(value);
    }
    if let Some(value) = platform {
        vars.platform = Some(value);
    }

    let next = ops::set_bucket_vars(&state, vars);
    store.save(&next);
    println!("🔧 Variables updated");
    Ok(())
}
