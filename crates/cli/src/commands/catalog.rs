//! `promptloom catalog` and `promptloom suggest` — catalog browsing.

use super::CommandResult;
use promptloom_catalog::suggest::find_matching_backend_components;
use promptloom_config::AppConfig;

pub fn list(category: Option<&str>) -> CommandResult {
    let config = AppConfig::load()?;
    let catalog = super::load_catalog(&config)?;

    let items: Vec<_> = catalog
        .items()
        .iter()
        .filter(|item| category.is_none_or(|c| item.category == c))
        .collect();

    if items.is_empty() {
        match category {
            Some(c) => println!("No catalog items in category '{c}'"),
            None => println!("The catalog is empty"),
        }
        return Ok(());
    }

    println!("📦 Catalog ({} items)", items.len());
    let mut current_category = "";
    for item in items {
        if item.category != current_category {
            current_category = &item.category;
            println!("\n{current_category}");
        }
        println!("  {:<22} {} — {}", item.id, item.title, item.description);
    }
    Ok(())
}

pub fn suggest(intent: &str) -> CommandResult {
    let config = AppConfig::load()?;
    let catalog = super::load_catalog(&config)?;

    let matches = find_matching_backend_components(intent, catalog.items());
    if matches.is_empty() {
        println!("No backend components match \"{intent}\"");
        return Ok(());
    }

    println!("💡 Backend components for \"{intent}\"");
    for item in matches {
        println!("  {:<22} {} — {}", item.id, item.title, item.description);
    }
    println!("\nAdd one with `promptloom add <item-id> --intent \"...\"`");
    Ok(())
}
