//! Promptloom CLI — the main entry point.
//!
//! Commands:
//! - `catalog` — Browse the component catalog
//! - `add`     — Add a catalog item to the bucket
//! - `remove`  — Remove bucket entries for an item
//! - `update`  — Patch bucket entries for an item
//! - `list`    — Show the bucket
//! - `reorder` — Rearrange the bucket sequence
//! - `vars`    — Show or set the template variables
//! - `suggest` — Suggest backend components for an intent
//! - `compose` — Compose the prompt from the enabled entries

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "promptloom",
    about = "Promptloom — compose AI code-assistant prompts from reusable components",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the component catalog
    Catalog {
        /// Only show items in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add a catalog item to the bucket
    Add {
        /// Catalog item id (see `promptloom catalog`)
        item_id: String,

        /// How you will use the item
        #[arg(short, long)]
        intent: String,
    },

    /// Remove all bucket entries for an item
    Remove {
        /// Catalog item id
        item_id: String,
    },

    /// Patch all bucket entries for an item
    Update {
        /// Catalog item id
        item_id: String,

        /// Replace the usage intent
        #[arg(short, long)]
        intent: Option<String>,

        /// Re-enable the entries
        #[arg(long, conflicts_with = "disable")]
        enable: bool,

        /// Exclude the entries from composition
        #[arg(long)]
        disable: bool,

        /// Set or clear the primary flag
        #[arg(long)]
        primary: Option<bool>,
    },

    /// Show the bucket
    List,

    /// Rearrange the bucket: current 1-based positions in their new order
    Reorder {
        positions: Vec<usize>,
    },

    /// Show the template variables, or set the ones given
    Vars {
        #[arg(long)]
        framework: Option<String>,

        #[arg(long)]
        language: Option<String>,

        #[arg(long)]
        style: Option<String>,

        #[arg(long)]
        database: Option<String>,

        #[arg(long)]
        platform: Option<String>,
    },

    /// Suggest backend components for a described intent
    Suggest {
        /// What you are building, in your own words
        intent: String,
    },

    /// Compose the prompt from the enabled bucket entries
    Compose {
        /// Use the size-bounded concise fallback
        #[arg(long)]
        concise: bool,

        /// Emit the result as JSON (prompt plus size metrics)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Catalog { category } => commands::catalog::list(category.as_deref())?,
        Commands::Add { item_id, intent } => commands::bucket::add(&item_id, &intent)?,
        Commands::Remove { item_id } => commands::bucket::remove(&item_id)?,
        Commands::Update {
            item_id,
            intent,
            enable,
            disable,
            primary,
        } => commands::bucket::update(&item_id, intent, enable, disable, primary)?,
        Commands::List => commands::bucket::list()?,
        Commands::Reorder { positions } => commands::bucket::reorder(&positions)?,
        Commands::Vars {
            framework,
            language,
            style,
            database,
            platform,
        } => commands::vars::run(framework, language, style, database, platform)?,
        Commands::Suggest { intent } => commands::catalog::suggest(&intent)?,
        Commands::Compose { concise, json } => commands::compose::run(concise, json)?,
    }

    Ok(())
}
