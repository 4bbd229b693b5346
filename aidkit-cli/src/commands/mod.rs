//! CLI command implementations

use aidkit::writer::{FileStatus, WriteMode, WriteOutcome};
use console::{style, Emoji};

pub mod controllers;
pub mod reorganize;
pub mod scaffold;
pub mod tables;

pub use controllers::ControllersCommand;
pub use reorganize::ReorganizeCommand;
pub use scaffold::ScaffoldCommand;
pub use tables::TablesCommand;

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");
static PENCIL: Emoji<'_, '_> = Emoji("✎ ", "");
static DOT: Emoji<'_, '_> = Emoji("· ", "");

/// Translate the `--dry-run` flag
pub(crate) const fn write_mode(dry_run: bool) -> WriteMode {
    if dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Write
    }
}

/// Print one line per written file, plus diffs in dry-run mode
pub(crate) fn print_outcomes(outcomes: &[WriteOutcome], mode: WriteMode) {
    for outcome in outcomes {
        let (marker, label) = match outcome.status {
            FileStatus::Created => (&CHECK, style(outcome.status.label()).green()),
            FileStatus::Overwritten => (&PENCIL, style(outcome.status.label()).yellow()),
            FileStatus::Unchanged => (&DOT, style(outcome.status.label()).dim()),
        };

        println!(
            "  {marker}{} {} ({})",
            label,
            style(outcome.path.display()).dim(),
            style(&outcome.description).dim()
        );

        if mode == WriteMode::DryRun {
            if let Some(diff) = &outcome.diff {
                print_diff(diff);
            }
        }
    }
}

/// Print a unified diff with colored +/- lines
pub(crate) fn print_diff(diff: &str) {
    for line in diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("    {}", style(line).bold());
        } else if line.starts_with('+') {
            println!("    {}", style(line).green());
        } else if line.starts_with('-') {
            println!("    {}", style(line).red());
        } else if line.starts_with("@@") {
            println!("    {}", style(line).cyan());
        } else {
            println!("    {line}");
        }
    }
}
