//! WTT CLI
//!
//! Command-line front end for the WTT inventory catalog.
//!
//! # Commands
//!
//! - `list` - List items, with search and filters
//! - `show` / `scan` - Look up one item by id or scanned code
//! - `add` / `edit` - Create or change items
//! - `checkout` / `return` - Toggle the checked-out flag
//! - `demo load` / `demo reset` - Load the demo catalog or clear everything
//! - `seed` - Write the starter items into an empty catalog (or pass
//!   `--seed` to any command)

mod commands;
mod error;
mod filter;
mod output;

use clap::{Parser, Subcommand};
use filter::Availability;
use output::Format;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wtt_core::{Condition, ItemRepository, RepositoryConfig};

/// Inventory tracking for a prop and warehouse catalog.
#[derive(Parser)]
#[command(name = "wtt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the data directory
    #[arg(global = true, short, long, default_value = "wtt-data")]
    path: PathBuf,

    /// Identifier prefix for new items
    #[arg(global = true, long, default_value = "WTT")]
    prefix: String,

    /// Write the starter items when opening an empty catalog
    #[arg(global = true, long)]
    seed: bool,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List items
    List {
        /// Search id, name and category (case-insensitive)
        #[arg(short, long)]
        query: Option<String>,

        /// Only items in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only available or only checked-out items
        #[arg(short, long, value_enum, default_value = "all")]
        status: Availability,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Show one item
    Show {
        /// Item id
        id: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Look up an item from a decoded label
    Scan {
        /// Text decoded from the label
        code: String,
    },

    /// Add an item
    Add {
        /// Item name
        #[arg(short, long)]
        name: String,

        /// Category
        #[arg(short, long, default_value = wtt_core::catalog::DEFAULT_CATEGORY)]
        category: String,

        /// Where the item is kept
        #[arg(short, long)]
        location: Option<String>,

        /// Condition (Excellent, Good, Fair, Needs Repair)
        #[arg(long, default_value_t = wtt_core::catalog::DEFAULT_CONDITION)]
        condition: Condition,
    },

    /// Edit an item
    Edit {
        /// Item id
        id: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New location (empty to clear)
        #[arg(short, long)]
        location: Option<String>,

        /// New condition
        #[arg(long)]
        condition: Option<Condition>,
    },

    /// Mark an item as checked out
    Checkout {
        /// Item id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Mark an item as returned
    Return {
        /// Item id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Demo catalog controls
    Demo {
        #[command(subcommand)]
        action: DemoAction,
    },

    /// Write the starter items if the catalog is empty
    ///
    /// Opening a catalog never seeds it on its own; run this once, or pass
    /// `--seed` to any command.
    Seed,

    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum DemoAction {
    /// Replace the catalog with the demo items
    Load,
    /// Remove every item and reset numbering
    Reset,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Version = cli.command {
        println!("WTT CLI v{}", env!("CARGO_PKG_VERSION"));
        println!("WTT Core v{}", wtt_core::VERSION);
        return Ok(());
    }

    let config = RepositoryConfig::new()
        .id_prefix(cli.prefix)
        .seed_if_empty(cli.seed);
    let repo = ItemRepository::open(&cli.path, config)?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::List {
            query,
            category,
            status,
            format,
        } => {
            let filter = filter::ItemFilter::new(query.as_deref(), category, status);
            commands::list::run(&repo, &filter, format, &mut out)?;
        }
        Commands::Show { id, format } => {
            commands::show::run(&repo, &id, format, &mut out)?;
        }
        Commands::Scan { code } => {
            commands::show::scan(&repo, &code, &mut out)?;
        }
        Commands::Add {
            name,
            category,
            location,
            condition,
        } => {
            let form = commands::add::AddForm {
                name,
                category,
                location,
                condition,
            };
            commands::add::run(&repo, &form, &mut out)?;
        }
        Commands::Edit {
            id,
            name,
            category,
            location,
            condition,
        } => {
            let changes = commands::edit::EditForm {
                name,
                category,
                location,
                condition,
            };
            commands::edit::run(&repo, &id, &changes, &mut out)?;
        }
        Commands::Checkout { id, yes } => {
            commands::checkout::run(&repo, &id, true, yes, &mut std::io::stdin().lock(), &mut out)?;
        }
        Commands::Return { id, yes } => {
            commands::checkout::run(&repo, &id, false, yes, &mut std::io::stdin().lock(), &mut out)?;
        }
        Commands::Demo { action } => match action {
            DemoAction::Load => commands::demo::load(&repo, &mut out)?,
            DemoAction::Reset => commands::demo::reset(&repo, &mut out)?,
        },
        Commands::Seed => {
            commands::demo::seed(&repo, &mut out)?;
        }
        Commands::Version => {}
    }

    Ok(())
}
