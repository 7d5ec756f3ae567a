//! AutoDoc CLI
//!
//! Thin command-line surface over the library crates.
//!
//! ## Commands
//!
//! - `scan` - flattened structure listing (or the raw entry forest)
//! - `context` - the three bounded generation artifacts
//! - `graph` - positioned structure graph as JSON

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod command;

#[derive(Parser)]
#[command(name = "autodoc", version, about = "Project structure graphs and bounded context for documentation generation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a directory and print its flattened listing
    Scan {
        path: PathBuf,
        /// Depth cap for the listing
        #[arg(long, default_value_t = autodoc_extract::DEFAULT_TREE_DEPTH)]
        depth: usize,
        /// Print the entry forest as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Derive the generation context artifacts for a directory
    Context {
        path: PathBuf,
        /// Project title; defaults to the directory name
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Build and lay out the structure graph, printed as JSON
    Graph { path: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Scan { path, depth, json } => command::scan(&path, depth, json).await,
        Command::Context { path, title, json } => command::context(&path, title, json).await,
        Command::Graph { path } => command::graph(&path).await,
    }
}
