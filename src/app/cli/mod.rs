//! CLI Adapter.

mod index;
mod list;
mod sync;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "gensync")]
#[command(version)]
#[command(
    about = "Download Perchance generators and emit a compile-time lookup table",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download missing generators and regenerate the index
    #[clap(visible_alias = "s")]
    Sync {
        /// Cloudflare clearance cookie value
        session: String,
        /// Re-download generators that already exist
        #[arg(short, long)]
        force: bool,
        /// Additional generator name (repeatable)
        #[arg(short, long = "name", value_name = "NAME")]
        names: Vec<String>,
        /// Sync only the names given with --name
        #[arg(long, requires = "names")]
        only: bool,
        /// Path to the config file (default: ./gensync.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Regenerate the index from generators already on disk
    #[clap(visible_alias = "i")]
    Index {
        /// Path to the config file (default: ./gensync.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List generators already on disk
    #[clap(visible_alias = "ls")]
    List {
        /// Path to the config file (default: ./gensync.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Sync { session, force, names, only, config } => {
            sync::run_sync(session, force, names, only, config)
        }
        Commands::Index { config } => index::run_index(config),
        Commands::List { config } => list::run_list(config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
