//! Table listing command

use aidkit::config::DatabaseSettings;
use aidkit::selection::numbered_menu;
use aidkit::{MySqlCatalog, TableSource};
use anyhow::{Context, Result};
use console::style;

/// Print the numbered list of tables in the configured schema
pub struct TablesCommand;

impl TablesCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be reached or queried.
    pub async fn execute(settings: &DatabaseSettings) -> Result<()> {
        let tables = fetch_tables(settings).await?;

        println!(
            "{} {}",
            style("Tables in").bold(),
            style(&settings.database).cyan().bold()
        );
        print_menu(&tables);

        Ok(())
    }
}

/// Connect to the configured database
pub(crate) async fn connect(settings: &DatabaseSettings) -> Result<MySqlCatalog> {
    MySqlCatalog::connect(settings).await.with_context(|| {
        format!(
            "Failed to connect to MySQL at {}:{} as {}",
            settings.host, settings.port, settings.user
        )
    })
}

/// Open one connection, list the tables, and close it again
async fn fetch_tables(settings: &DatabaseSettings) -> Result<Vec<String>> {
    let catalog = connect(settings).await?;

    let tables = catalog.list_tables().await;
    catalog.close().await;

    tables.context("Failed to list tables")
}

/// Print `"<n>. <table>"` lines
pub(crate) fn print_menu(tables: &[String]) {
    if tables.is_empty() {
        println!("  {}", style("No tables found.").dim());
        return;
    }

    for line in numbered_menu(tables) {
        println!("  {line}");
    }
}
