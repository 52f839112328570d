//! Subcommand implementations.

pub mod bucket;
pub mod catalog;
pub mod compose;
pub mod vars;

use promptloom_catalog::Catalog;
use promptloom_config::AppConfig;
use promptloom_store::FileStore;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// The state store configured for this session.
fn open_store(config: &AppConfig) -> FileStore {
    FileStore::new(config.state_path())
}

/// The configured catalog: a user-supplied JSON file, or the built-in set.
fn load_catalog(config: &AppConfig) -> Result<Catalog, Box<dyn std::error::Error>> {
    match &config.catalog_file {
        Some(path) => Ok(Catalog::load(path)?),
        None => {
            tracing::debug!("No catalog file configured, using the built-in catalog");
            Ok(Catalog::builtin())
        }
    }
}
