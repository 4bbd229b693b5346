//! Front-end scaffold command

use aidkit::scaffold::ScaffoldReport;
use aidkit::ScaffoldWriter;
use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use super::{print_outcomes, write_mode};

/// Create the Next.js directory tree and write the boilerplate files
pub struct ScaffoldCommand {
    root: PathBuf,
    dry_run: bool,
}

impl ScaffoldCommand {
    /// Create a new scaffold command rooted at `root`
    #[must_use]
    pub const fn new(root: PathBuf, dry_run: bool) -> Self {
        Self { root, dry_run }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or file cannot be written.
    pub fn execute(&self) -> Result<ScaffoldReport> {
        println!(
            "{} {}",
            style("Scaffolding front-end in").green().bold(),
            style(self.root.display()).cyan().bold()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Writing scaffold files...");

        let mode = write_mode(self.dry_run);
        let report = ScaffoldWriter::new(&self.root)
            .write(mode)
            .with_context(|| format!("Failed to scaffold {}", self.root.display()));

        spinner.finish_and_clear();
        let report = report?;

        self.print_summary(&report);
        print_outcomes(&report.files, mode);

        Ok(report)
    }

    fn print_summary(&self, report: &ScaffoldReport) {
        let verb = if self.dry_run { "Would create" } else { "Created" };
        for directory in report.directories.iter().filter(|d| d.created) {
            println!("  {} {}", style(verb).green(), style(directory.path.display()).dim());
        }

        println!(
            "\n{} {} files:",
            style(if self.dry_run { "Would write" } else { "Wrote" }).green().bold(),
            report.files.len()
        );
    }
}
