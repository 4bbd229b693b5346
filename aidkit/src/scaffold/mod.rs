//! Front-end project scaffold
//!
//! Creates the Next.js directory layout and writes the static boilerplate
//! files into it:
//!
//! - `src/styles/globals.css`
//! - `src/app/pages/_app.js`
//! - `src/app/components/*.jsx` (header, hero, about, services, testimonials,
//!   blog preview, events calendar, contact, footer)
//! - `src/app/pages/*.jsx` (index, about, services, blog, events, contact, portal)
//! - `tailwind.config.js`
//!
//! Directory creation is idempotent. Every file is overwritten on each run;
//! files the scaffold does not own are never touched.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AidkitError, Result};
use crate::writer::{write_all, GeneratedFile, WriteMode, WriteOutcome};

pub mod files;
pub use files::*;

/// Directories created before any file is written
pub const DIRECTORIES: &[&str] = &[
    "public/images",
    "src/app/components",
    "src/app/pages",
    "src/styles",
];

const COMPONENTS: &[(&str, &str)] = &[
    ("Header.jsx", COMPONENT_HEADER),
    ("Hero.jsx", COMPONENT_HERO),
    ("About.jsx", COMPONENT_ABOUT),
    ("Services.jsx", COMPONENT_SERVICES),
    ("Testimonials.jsx", COMPONENT_TESTIMONIALS),
    ("BlogPreview.jsx", COMPONENT_BLOG_PREVIEW),
    ("EventsCalendar.jsx", COMPONENT_EVENTS_CALENDAR),
    ("Contact.jsx", COMPONENT_CONTACT),
    ("Footer.jsx", COMPONENT_FOOTER),
];

const PAGES: &[(&str, &str)] = &[
    ("index.jsx", PAGE_INDEX),
    ("about.jsx", PAGE_ABOUT),
    ("services.jsx", PAGE_SERVICES),
    ("blog.jsx", PAGE_BLOG),
    ("events.jsx", PAGE_EVENTS),
    ("contact.jsx", PAGE_CONTACT),
    ("portal.jsx", PAGE_PORTAL),
];

/// A scaffold directory and whether this run created it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryOutcome {
    /// Full path
    pub path: PathBuf,
    /// `false` if the directory already existed
    pub created: bool,
}

/// Everything a scaffold run did
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    /// One entry per scaffold directory
    pub directories: Vec<DirectoryOutcome>,
    /// One entry per scaffold file
    pub files: Vec<WriteOutcome>,
}

/// Writes the scaffold under a project root
#[derive(Debug, Clone)]
pub struct ScaffoldWriter {
    root: PathBuf,
}

impl ScaffoldWriter {
    /// Scaffold into `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The fixed set of scaffold files, relative to the root
    #[must_use]
    pub fn files() -> Vec<GeneratedFile> {
        let mut files = vec![
            static_file("src/styles/globals.css", GLOBALS_CSS, "Tailwind stylesheet"),
            static_file("src/app/pages/_app.js", APP_JS, "App wrapper"),
        ];

        files.extend(COMPONENTS.iter().map(|(name, content)| {
            static_file(&format!("src/app/components/{name}"), content, "Component")
        }));
        files.extend(
            PAGES
                .iter()
                .map(|(name, content)| static_file(&format!("src/app/pages/{name}"), content, "Page")),
        );

        files.push(static_file("tailwind.config.js", TAILWIND_CONFIG, "Tailwind configuration"));
        files
    }

    /// Create the scaffold directories, skipping any that exist
    ///
    /// In [`WriteMode::DryRun`] nothing is created; the outcome still reports
    /// which directories would be.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created, for example because a
    /// regular file occupies its path.
    pub fn create_directories(&self, mode: WriteMode) -> Result<Vec<DirectoryOutcome>> {
        DIRECTORIES
            .iter()
            .map(|dir| -> Result<DirectoryOutcome> {
                let path = self.root.join(dir);
                let created = !path.is_dir();
                if created && mode == WriteMode::Write {
                    fs::create_dir_all(&path).map_err(|e| AidkitError::io(&path, e))?;
                    tracing::debug!(path = %path.display(), "Created directory");
                }
                Ok(DirectoryOutcome { path, created })
            })
            .collect()
    }

    /// Create the directories, then write every scaffold file
    ///
    /// # Errors
    ///
    /// Stops at the first I/O failure. Directories and files created before the
    /// failure are left in place.
    pub fn write(&self, mode: WriteMode) -> Result<ScaffoldReport> {
        let directories = self.create_directories(mode)?;
        let files = write_all(&self.root, &Self::files(), mode)?;

        tracing::info!(
            root = %self.root.display(),
            directories = directories.iter().filter(|d| d.created).count(),
            files = files.len(),
            "Scaffold complete"
        );

        Ok(ScaffoldReport { directories, files })
    }
}

fn static_file(path: &str, content: &str, description: &str) -> GeneratedFile {
    GeneratedFile {
        path: PathBuf::from(path),
        content: content.to_string(),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::FileStatus;
    use tempfile::tempdir;

    #[test]
    fn test_file_list() {
        let files = ScaffoldWriter::files();
        assert_eq!(files.len(), 2 + COMPONENTS.len() + PAGES.len() + 1);
        assert_eq!(files[0].path, PathBuf::from("src/styles/globals.css"));
        assert_eq!(files.last().unwrap().path, PathBuf::from("tailwind.config.js"));
        assert!(files
            .iter()
            .any(|f| f.path == Path::new("src/app/components/EventsCalendar.jsx")));
    }

    #[test]
    fn test_every_file_lives_in_a_scaffold_directory() {
        for file in ScaffoldWriter::files() {
            let parent = file.path.parent().unwrap();
            assert!(
                parent.as_os_str().is_empty() || DIRECTORIES.iter().any(|d| Path::new(d) == parent),
                "{} is outside the scaffold directories",
                file.path.display()
            );
        }
    }

    #[test]
    fn test_templates_are_plain_text() {
        assert!(GLOBALS_CSS.starts_with("@tailwind base;"));
        assert!(APP_JS.contains("<Header />"));
        assert!(TAILWIND_CONFIG.contains("require('daisyui')"));
        assert!(COMPONENT_FOOTER.contains("© 2024 InclusiveAid"));
        assert!(PAGE_INDEX.contains("<EventsCalendar />"));
    }

    #[test]
    fn test_create_directories_twice() {
        let dir = tempdir().unwrap();
        let writer = ScaffoldWriter::new(dir.path());

        let first = writer.create_directories(WriteMode::Write).unwrap();
        assert!(first.iter().all(|d| d.created));

        let second = writer.create_directories(WriteMode::Write).unwrap();
        assert!(second.iter().all(|d| !d.created));
        for dir_name in DIRECTORIES {
            assert!(dir.path().join(dir_name).is_dir());
        }
    }

    #[test]
    fn test_dry_run_creates_nothing() {
        let dir = tempdir().unwrap();
        let report = ScaffoldWriter::new(dir.path()).write(WriteMode::DryRun).unwrap();

        assert!(report.directories.iter().all(|d| d.created));
        assert!(report.files.iter().all(|f| f.status == FileStatus::Created));
        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn test_directory_blocked_by_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("src"), "not a directory").unwrap();

        let result = ScaffoldWriter::new(dir.path()).write(WriteMode::Write);
        assert!(matches!(result, Err(AidkitError::Io { .. })));
        // public/images precedes src/* and was already created
        assert!(dir.path().join("public/images").is_dir());
    }
}
