//! Writing generated files to disk
//!
//! Generators produce [`GeneratedFile`] values; nothing touches the filesystem
//! until [`write_all`] runs. Existing files are always overwritten in
//! [`WriteMode::Write`]. [`WriteMode::DryRun`] classifies every file and
//! computes a unified diff for overwrites without writing anything.

use similar::TextDiff;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AidkitError, Result};

/// A file produced by a generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// Short description for user feedback
    pub description: String,
}

/// Whether [`write_all`] touches the filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write every file, replacing existing content
    #[default]
    Write,
    /// Report what would happen without writing
    DryRun,
}

/// What happened (or would happen) to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// The file did not exist
    Created,
    /// The file existed with different content
    Overwritten,
    /// The file existed with identical content
    Unchanged,
}

impl FileStatus {
    /// Lowercase label for display
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Overwritten => "overwritten",
            Self::Unchanged => "unchanged",
        }
    }
}

/// Result of writing one [`GeneratedFile`]
#[derive(Debug, Clone)]
pub struct WriteOutcome {
    /// Full path of the file
    pub path: PathBuf,
    /// Status relative to what was on disk before
    pub status: FileStatus,
    /// Unified diff from the previous content, for overwritten files
    pub diff: Option<String>,
    /// Description carried over from the generated file
    pub description: String,
}

/// Write (or preview) every file under `root`, in order
///
/// Later entries with the same path replace earlier ones, so the last write
/// wins. Each entry is compared against the content an earlier entry in the
/// same batch left at its path, so a dry run reports the same statuses and
/// diffs as a real run. Parent directories are created as needed.
///
/// # Errors
///
/// Stops at the first file that cannot be read, have its parent created, or be
/// written. Files written before the failure stay on disk.
pub fn write_all(root: &Path, files: &[GeneratedFile], mode: WriteMode) -> Result<Vec<WriteOutcome>> {
    let mut outcomes = Vec::with_capacity(files.len());
    let mut batch: HashMap<PathBuf, String> = HashMap::new();

    for file in files {
        let full_path = root.join(&file.path);
        let previous = match batch.get(&full_path) {
            Some(content) => Some(content.clone()),
            None => read_existing(&full_path)?,
        };

        let (status, diff) = match previous {
            None => (FileStatus::Created, None),
            Some(ref old) if old.as_bytes() == file.content.as_bytes() => (FileStatus::Unchanged, None),
            Some(ref old) => (
                FileStatus::Overwritten,
                Some(unified_diff(old, &file.content, &file.path)),
            ),
        };

        if mode == WriteMode::Write {
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent).map_err(|e| AidkitError::io(parent, e))?;
            }
            fs::write(&full_path, &file.content).map_err(|e| AidkitError::io(&full_path, e))?;
            tracing::debug!(path = %full_path.display(), status = status.label(), "Wrote file");
        }

        batch.insert(full_path.clone(), file.content.clone());
        outcomes.push(WriteOutcome {
            path: full_path,
            status,
            diff,
            description: file.description.clone(),
        });
    }

    Ok(outcomes)
}

/// Unified diff between two versions of a file
#[must_use]
pub fn unified_diff(old: &str, new: &str, path: &Path) -> String {
    let name = path.display().to_string();
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{name}"), &format!("b/{name}"))
        .to_string()
}

fn read_existing(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = fs::read(path).map_err(|e| AidkitError::io(path, e))?;
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}
