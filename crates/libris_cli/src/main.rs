//! Libris CLI
//!
//! Command-line front end for the Libris catalog.
//!
//! # Commands
//!
//! - `search` - Search one field and compare lookup strategies
//! - `script` - Run a file of catalog commands
//! - `demo` - Show how insertion order shapes the indexes
//! - `version` - Show version information

mod commands;
mod error;
mod render;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Libris catalog search tools.
#[derive(Parser)]
#[command(name = "libris")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search one field and compare lookup strategies
    Search {
        /// Field to search (title, isbn, author)
        #[arg(long)]
        field: String,

        /// Query text
        #[arg(short, long)]
        query: String,

        /// Requester ID
        #[arg(long)]
        user_id: String,

        /// Requester name
        #[arg(long)]
        user_name: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Start from an empty catalog instead of the sample books
        #[arg(long)]
        no_samples: bool,
    },

    /// Run a file of catalog commands
    Script {
        /// Path to the script file
        file: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Start from an empty catalog instead of the sample books
        #[arg(long)]
        no_samples: bool,
    },

    /// Show how insertion order shapes the indexes
    Demo {
        /// Number of synthetic records
        #[arg(short, long, default_value = "1000")]
        records: usize,

        /// Insertion order (sorted, shuffled)
        #[arg(short, long, default_value = "sorted")]
        order: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Search {
            field,
            query,
            user_id,
            user_name,
            format,
            no_samples,
        } => {
            commands::search::run(&field, &query, &user_id, &user_name, &format, no_samples)?;
        }
        Commands::Script {
            file,
            format,
            no_samples,
        } => {
            commands::script::run(&file, &format, no_samples)?;
        }
        Commands::Demo {
            records,
            order,
            format,
        } => {
            commands::demo::run(records, &order, &format)?;
        }
        Commands::Version => {
            println!("Libris CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Libris Core v{}", libris_core::VERSION);
        }
    }

    Ok(())
}
