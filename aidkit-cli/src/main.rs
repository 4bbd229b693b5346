//! aidkit CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use aidkit::{observability, AidkitConfig};
use aidkit_cli_lib::{ControllersCommand, ReorganizeCommand, ScaffoldCommand, TablesCommand};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aidkit")]
#[command(version)]
#[command(about = "Developer tooling for the InclusiveAid web stack", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./aidkit.toml and the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the tables in the configured database
    Tables,
    /// Generate Express controllers from route files
    Controllers(ControllersCommand),
    /// Create the Next.js front-end scaffold
    Scaffold {
        /// Project root (default from config)
        #[arg(long)]
        root: Option<PathBuf>,
        /// Show what would be written without writing
        #[arg(long)]
        dry_run: bool,
    },
    /// Move components into category folders and update imports
    Reorganize {
        /// Front-end root (default from config)
        #[arg(long)]
        root: Option<PathBuf>,
        /// Show what would change without touching files
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AidkitConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AidkitConfig::load().context("Failed to load configuration")?,
    };

    observability::init(&config.logging);
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Tables => {
            TablesCommand::execute(&config.database).await?;
        }
        Commands::Controllers(cmd) => {
            cmd.execute(&config).await?;
        }
        Commands::Scaffold { root, dry_run } => {
            let root = root.unwrap_or_else(|| config.scaffold.root.clone());
            ScaffoldCommand::new(root, dry_run).execute()?;
        }
        Commands::Reorganize { root, dry_run } => {
            let root = root.unwrap_or_else(|| config.reorganize.root.clone());
            ReorganizeCommand::new(root, dry_run).execute()?;
        }
    }

    Ok(())
}
