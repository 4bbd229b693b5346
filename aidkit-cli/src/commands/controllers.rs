//! Controller generation command
//!
//! Lists the database tables, asks which ones to use, then generates one
//! Express controller per route declaration found in the routes directory.
//!
//! The table selection is validated and logged, but generation does not
//! depend on it: every discovered route gets a controller.
//!
//! # Example
//!
//! ```bash
//! aidkit controllers --select 1,3
//! aidkit controllers --skip-db --recursive --dry-run
//! ```

use aidkit::config::{AidkitConfig, ControllerSettings};
use aidkit::selection::select_tables;
use aidkit::writer::{write_all, WriteMode, WriteOutcome};
use aidkit::{ControllerGenerator, RouteScanner, TableSource};
use anyhow::{Context, Result};
use clap::Args;
use console::style;
use dialoguer::Input;
use std::path::PathBuf;

use super::tables::{connect, print_menu};
use super::{print_outcomes, write_mode};

/// Generate controllers from route declarations
#[derive(Debug, Clone, Default, Args)]
pub struct ControllersCommand {
    /// Directory containing route files (default from config)
    #[arg(long)]
    pub routes_dir: Option<PathBuf>,

    /// Directory receiving generated controllers (default from config)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Scan route directories recursively
    #[arg(long)]
    pub recursive: bool,

    /// Comma-separated table numbers; skips the interactive prompt
    #[arg(long, value_name = "N,N,...")]
    pub select: Option<String>,

    /// Do not connect to the database or prompt for tables
    #[arg(long)]
    pub skip_db: bool,

    /// Show what would be written without writing
    #[arg(long)]
    pub dry_run: bool,
}

impl ControllersCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database cannot be reached or queried
    /// - The table selection is malformed or out of range
    /// - The routes directory cannot be read
    /// - A controller cannot be written
    pub async fn execute(&self, config: &AidkitConfig) -> Result<()> {
        let settings = self.settings(&config.controllers);

        if !self.skip_db {
            let catalog = connect(&config.database).await?;
            let selected = self.pick_tables(&catalog).await;
            catalog.close().await;

            let selected = selected?;
            tracing::info!(
                selected = ?selected,
                "Table selection recorded; controllers are generated for every route"
            );
        }

        println!(
            "\n{} {} {}",
            style("Generating controllers from").cyan().bold(),
            style(settings.routes_dir.display()).green().bold(),
            style("...").cyan().bold()
        );

        let mode = write_mode(self.dry_run);
        let outcomes = generate_controllers(&settings, mode)?;

        if outcomes.is_empty() {
            println!("  {}", style("No route declarations found.").dim());
            return Ok(());
        }

        println!(
            "\n{} {} files:",
            style(if self.dry_run { "Would write" } else { "Generated" }).green().bold(),
            outcomes.len()
        );
        print_outcomes(&outcomes, mode);

        if !self.dry_run {
            println!(
                "\n{} Controllers generated successfully.",
                style("✨").green().bold()
            );
        }

        Ok(())
    }

    /// Controller settings with command-line overrides applied
    #[must_use]
    pub fn settings(&self, base: &ControllerSettings) -> ControllerSettings {
        ControllerSettings {
            routes_dir: self.routes_dir.clone().unwrap_or_else(|| base.routes_dir.clone()),
            output_dir: self.output_dir.clone().unwrap_or_else(|| base.output_dir.clone()),
            extension: base.extension.clone(),
            recursive: self.recursive || base.recursive,
        }
    }

    /// List the tables in `source`, print the menu, and resolve the selection
    ///
    /// # Errors
    ///
    /// Returns an error if listing fails, the prompt cannot be read, or the
    /// selection is invalid.
    pub async fn pick_tables(&self, source: &dyn TableSource) -> Result<Vec<String>> {
        let tables = source.list_tables().await.context("Failed to list tables")?;
        println!("{}", style("Available tables:").bold());
        print_menu(&tables);

        self.choose_tables(&tables)
    }

    /// Resolve the table selection from `--select` or an interactive prompt
    fn choose_tables(&self, tables: &[String]) -> Result<Vec<String>> {
        let input = match &self.select {
            Some(select) => select.clone(),
            None => Input::<String>::new()
                .with_prompt(
                    "Enter the numbers of the tables for which you want to generate controllers (comma-separated)",
                )
                .interact_text()
                .context("Failed to read table selection")?,
        };

        select_tables(tables, &input).context("Invalid table selection")
    }
}

/// Scan route files and write one controller per declaration
///
/// # Errors
///
/// Returns an error if the routes directory cannot be read, a template fails
/// to render, or a controller cannot be written.
pub fn generate_controllers(settings: &ControllerSettings, mode: WriteMode) -> Result<Vec<WriteOutcome>> {
    let routes = RouteScanner::new(settings.extension.as_str())
        .recursive(settings.recursive)
        .scan_dir(&settings.routes_dir)
        .with_context(|| {
            format!("Failed to read route files in {}", settings.routes_dir.display())
        })?;

    let files = ControllerGenerator::new()
        .generate(&routes)
        .context("Failed to render controllers")?;

    write_all(&settings.output_dir, &files, mode).with_context(|| {
        format!("Failed to write controllers to {}", settings.output_dir.display())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let base = ControllerSettings::default();
        let command = ControllersCommand {
            routes_dir: Some(PathBuf::from("api/routes")),
            recursive: true,
            ..ControllersCommand::default()
        };

        let settings = command.settings(&base);
        assert_eq!(settings.routes_dir, PathBuf::from("api/routes"));
        assert_eq!(settings.output_dir, base.output_dir);
        assert!(settings.recursive);
    }

    #[test]
    fn test_config_recursive_is_kept() {
        let base = ControllerSettings {
            recursive: true,
            ..ControllerSettings::default()
        };
        assert!(ControllersCommand::default().settings(&base).recursive);
    }

    #[test]
    fn test_preset_selection() {
        let command = ControllersCommand {
            select: Some("2".to_string()),
            ..ControllersCommand::default()
        };
        let tables = vec!["users".to_string(), "roles".to_string()];
        assert_eq!(command.choose_tables(&tables).unwrap(), vec!["roles"]);
    }

    #[test]
    fn test_preset_selection_out_of_range() {
        let command = ControllersCommand {
            select: Some("3".to_string()),
            ..ControllersCommand::default()
        };
        let tables = vec!["users".to_string(), "roles".to_string()];
        let err = command.choose_tables(&tables).unwrap_err();
        assert!(format!("{err:#}").contains("out of range"));
    }
}
