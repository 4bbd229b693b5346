//! Component reorganization
//!
//! Moves flat component files under `src/components/` into category folders,
//! then rewrites every `../components/<Component>` import under `src/` to the
//! new location. Afterwards `dashboard/Sidebar.jsx` becomes
//! `dashboard/DashboardSidebar.jsx` and the obsolete top-level `Header.jsx` is
//! deleted. Running it again finds nothing left to do.
//!
//! The run refuses to start unless `src/components` already exists.

use regex::{NoExpand, Regex};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use walkdir::WalkDir;

use crate::error::{AidkitError, Result};
use crate::writer::{unified_diff, WriteMode};

/// Component file name and the category folder it belongs in
pub const COMPONENT_FOLDERS: &[(&str, &str)] = &[
    ("AdminDashboardContent.jsx", "dashboard"),
    ("ClientDashboardContent.jsx", "dashboard"),
    ("Dashboard.jsx", "dashboard"),
    ("ServiceWorkerDashboardContent.jsx", "dashboard"),
    ("ProfileContent.jsx", "dashboard"),
    ("ServiceWorkerServicesView.jsx", "dashboard"),
    ("ClientServicesView.jsx", "dashboard"),
    ("AdminServicesView.jsx", "dashboard"),
    ("Sidebar.jsx", "dashboard"),
    ("Navbar.jsx", "common"),
    ("Footer.jsx", "common"),
    ("About.jsx", "common"),
    ("BlogPreview.jsx", "common"),
    ("CommunityContent.jsx", "common"),
    ("Contact.jsx", "common"),
    ("GoalTracker.jsx", "common"),
    ("Hero.jsx", "common"),
    ("Testimonials.jsx", "common"),
    ("ServiceCard.jsx", "services"),
    ("ServiceModal.jsx", "services"),
    ("ServiceRequestModal.jsx", "services"),
    ("ServicesContent.jsx", "services"),
    ("AppointmentModal.jsx", "appointments"),
    ("UpcomingAppointments.jsx", "appointments"),
    ("ZoomBooking.jsx", "appointments"),
    ("ZoomMeetingInterface.jsx", "appointments"),
    ("ZoomContent.jsx", "appointments"),
    ("ZoomMeetingRoom.jsx", "appointments"),
    ("NDISPlanContent.jsx", "content"),
    ("SupportContent.jsx", "content"),
    ("UserManagementContent.jsx", "content"),
    ("ProtectedRoute.jsx", "utilities"),
    ("RecentActivities.jsx", "utilities"),
    ("EventsCalendar.jsx", "utilities"),
];

const COMPONENTS_DIR: &str = "src/components";
const SOURCE_DIR: &str = "src";
const SIDEBAR: &str = "Sidebar.jsx";
const DASHBOARD_SIDEBAR: &str = "DashboardSidebar.jsx";
const OBSOLETE_HEADER: &str = "Header.jsx";

fn sidebar_import() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\.\./components/dashboard/Sidebar\b").expect("Invalid regex")
    })
}

/// A file moved from one place to another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMove {
    /// Original path
    pub from: PathBuf,
    /// New path
    pub to: PathBuf,
}

/// A source file whose imports were rewritten
#[derive(Debug, Clone)]
pub struct ImportRewrite {
    /// The rewritten file
    pub path: PathBuf,
    /// Unified diff of the change
    pub diff: String,
}

/// Everything a reorganization did (or would do)
#[derive(Debug, Clone, Default)]
pub struct ReorganizeReport {
    /// Folders created under `src/components`
    pub created_folders: Vec<PathBuf>,
    /// Components moved into category folders
    pub moved: Vec<FileMove>,
    /// `Sidebar.jsx` renamed to `DashboardSidebar.jsx`
    pub renamed_sidebar: Option<FileMove>,
    /// Removed obsolete header component
    pub removed_header: Option<PathBuf>,
    /// Files whose imports changed
    pub rewritten: Vec<ImportRewrite>,
}

impl ReorganizeReport {
    /// `true` if nothing needed to change
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.created_folders.is_empty()
            && self.moved.is_empty()
            && self.renamed_sidebar.is_none()
            && self.removed_header.is_none()
            && self.rewritten.is_empty()
    }

    /// Where `path` lives after the moves and the sidebar rename
    fn relocated(&self, path: &Path) -> PathBuf {
        let mut current = self
            .moved
            .iter()
            .find(|m| m.from == path)
            .map_or_else(|| path.to_path_buf(), |m| m.to.clone());

        if let Some(rename) = &self.renamed_sidebar {
            if rename.from == current {
                current = rename.to.clone();
            }
        }
        current
    }
}

/// Reorganizes components under a front-end root
#[derive(Debug)]
pub struct ComponentReorganizer {
    root: PathBuf,
    import_rules: Vec<(Regex, String)>,
}

impl ComponentReorganizer {
    /// Reorganize the project rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let import_rules = COMPONENT_FOLDERS
            .iter()
            .map(|(file, folder)| {
                let stem = file.trim_end_matches(".jsx");
                let pattern = format!(
                    r#"(from\s+['"])\.\./components/{}((?:\.jsx)?['"])"#,
                    regex::escape(stem)
                );
                let regex = Regex::new(&pattern).expect("Invalid regex");
                (regex, format!("${{1}}../components/{folder}/{stem}${{2}}"))
            })
            .collect();

        Self {
            root: root.into(),
            import_rules,
        }
    }

    /// Run the reorganization
    ///
    /// Every script under `src/` is read and its rewrite planned before any
    /// file moves, so an unreadable script aborts the run with the tree intact.
    ///
    /// # Errors
    ///
    /// Returns [`AidkitError::Io`] with [`io::ErrorKind::NotFound`] if
    /// `src/components` does not exist under the root. Otherwise stops at the
    /// first filesystem error; moves made before the failure are not undone.
    pub fn run(&self, mode: WriteMode) -> Result<ReorganizeReport> {
        let components_dir = self.root.join(COMPONENTS_DIR);
        if !components_dir.is_dir() {
            return Err(AidkitError::io(
                &components_dir,
                io::Error::new(io::ErrorKind::NotFound, "components directory not found"),
            ));
        }

        let planned = self.plan_rewrites()?;
        let mut report = ReorganizeReport::default();

        for (file, folder) in COMPONENT_FOLDERS {
            let folder_path = components_dir.join(folder);
            if !folder_path.is_dir() && !report.created_folders.contains(&folder_path) {
                if mode == WriteMode::Write {
                    fs::create_dir(&folder_path).map_err(|e| AidkitError::io(&folder_path, e))?;
                }
                report.created_folders.push(folder_path.clone());
            }

            let from = components_dir.join(file);
            if from.is_file() {
                let to = folder_path.join(file);
                if mode == WriteMode::Write {
                    fs::rename(&from, &to).map_err(|e| AidkitError::io(&from, e))?;
                }
                tracing::debug!(from = %from.display(), to = %to.display(), "Moved component");
                report.moved.push(FileMove { from, to });
            }
        }

        let dashboard = components_dir.join("dashboard");
        let sidebar = dashboard.join(SIDEBAR);
        let sidebar_moved_here = report.moved.iter().any(|m| m.to == sidebar);
        if sidebar.is_file() || sidebar_moved_here {
            let to = dashboard.join(DASHBOARD_SIDEBAR);
            if mode == WriteMode::Write {
                fs::rename(&sidebar, &to).map_err(|e| AidkitError::io(&sidebar, e))?;
            }
            report.renamed_sidebar = Some(FileMove { from: sidebar, to });
        }

        report.rewritten = self.apply_rewrites(planned, &report, mode)?;

        let header = components_dir.join(OBSOLETE_HEADER);
        if header.is_file() {
            if mode == WriteMode::Write {
                fs::remove_file(&header).map_err(|e| AidkitError::io(&header, e))?;
            }
            report.removed_header = Some(header);
        }

        tracing::info!(
            moved = report.moved.len(),
            rewritten = report.rewritten.len(),
            renamed_sidebar = report.renamed_sidebar.is_some(),
            removed_header = report.removed_header.is_some(),
            "Reorganization complete"
        );

        Ok(report)
    }

    /// Apply every import rule to one file's text
    #[must_use]
    pub fn rewrite_source(&self, text: &str) -> String {
        let mut rewritten = text.to_string();

        for (regex, replacement) in &self.import_rules {
            if regex.is_match(&rewritten) {
                rewritten = regex.replace_all(&rewritten, replacement.as_str()).into_owned();
            }
        }

        if sidebar_import().is_match(&rewritten) {
            rewritten = sidebar_import()
                .replace_all(&rewritten, NoExpand("../components/dashboard/DashboardSidebar"))
                .into_owned();
        }

        rewritten
    }

    /// Read every script under `src/` and compute its rewritten text
    fn plan_rewrites(&self) -> Result<Vec<PlannedRewrite>> {
        let source_dir = self.root.join(SOURCE_DIR);
        let mut planned = Vec::new();

        for entry in WalkDir::new(&source_dir).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() || !is_script(entry.path()) {
                continue;
            }

            let path = entry.path();
            let original = fs::read_to_string(path).map_err(|e| AidkitError::io(path, e))?;
            let rewritten = self.rewrite_source(&original);
            if rewritten != original {
                planned.push(PlannedRewrite {
                    path: path.to_path_buf(),
                    original,
                    rewritten,
                });
            }
        }

        Ok(planned)
    }

    /// Write planned rewrites to wherever their files ended up
    fn apply_rewrites(
        &self,
        planned: Vec<PlannedRewrite>,
        report: &ReorganizeReport,
        mode: WriteMode,
    ) -> Result<Vec<ImportRewrite>> {
        planned
            .into_iter()
            .map(|plan| -> Result<ImportRewrite> {
                let path = report.relocated(&plan.path);
                if mode == WriteMode::Write {
                    fs::write(&path, &plan.rewritten).map_err(|e| AidkitError::io(&path, e))?;
                }

                let relative = path.strip_prefix(&self.root).unwrap_or(&path);
                let diff = unified_diff(&plan.original, &plan.rewritten, relative);
                Ok(ImportRewrite { path, diff })
            })
            .collect()
    }
}

struct PlannedRewrite {
    path: PathBuf,
    original: String,
    rewritten: String,
}

fn is_script(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "js" || ext == "jsx")
}
