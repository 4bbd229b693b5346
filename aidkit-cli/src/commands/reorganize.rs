//! Component reorganization command

use aidkit::reorganize::ReorganizeReport;
use aidkit::ComponentReorganizer;
use anyhow::{Context, Result};
use console::style;
use std::path::PathBuf;

use super::{print_diff, write_mode};

/// Move flat components into category folders and fix their imports
pub struct ReorganizeCommand {
    root: PathBuf,
    dry_run: bool,
}

impl ReorganizeCommand {
    /// Create a new reorganize command rooted at `root`
    #[must_use]
    pub const fn new(root: PathBuf, dry_run: bool) -> Self {
        Self { root, dry_run }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be moved, read, or rewritten.
    pub fn execute(&self) -> Result<ReorganizeReport> {
        let report = ComponentReorganizer::new(&self.root)
            .run(write_mode(self.dry_run))
            .with_context(|| format!("Failed to reorganize components in {}", self.root.display()))?;

        if report.is_empty() {
            println!("{}", style("Components are already organized.").dim());
            return Ok(report);
        }

        self.print_report(&report);
        Ok(report)
    }

    fn print_report(&self, report: &ReorganizeReport) {
        let prefix = if self.dry_run { "Would " } else { "" };

        for folder in &report.created_folders {
            println!("  {}{} {}", prefix, style("create").green(), folder.display());
        }
        for moved in &report.moved {
            println!(
                "  {}{} {} -> {}",
                prefix,
                style("move").cyan(),
                moved.from.display(),
                moved.to.display()
            );
        }
        if let Some(rename) = &report.renamed_sidebar {
            println!(
                "  {}{} {} -> {}",
                prefix,
                style("rename").cyan(),
                rename.from.display(),
                rename.to.display()
            );
        }
        for rewrite in &report.rewritten {
            println!("  {}{} {}", prefix, style("rewrite").yellow(), rewrite.path.display());
            if self.dry_run {
                print_diff(&rewrite.diff);
            }
        }
        if let Some(header) = &report.removed_header {
            println!("  {}{} {}", prefix, style("remove").red(), header.display());
        }

        if !self.dry_run {
            println!("\n{}", style("Components reorganized.").green().bold());
        }
    }
}
