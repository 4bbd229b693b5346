//! Route declaration discovery
//!
//! Express route files register handlers with calls such as
//! `router.get('/users/:id', auth, userController.getUserById)`. This module
//! finds those files, pulls the verb and path literal out of every call, and
//! derives the identifier used to name the generated controller.

use regex::Regex;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use walkdir::WalkDir;

use crate::error::{AidkitError, Result};

/// Identifier used when a path normalizes to nothing (e.g. `/`)
pub const ROOT_IDENTIFIER: &str = "index";

/// Matches `router.<verb>(` immediately followed by a quoted path literal
fn route_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"router\.(get|post|put|delete)\(['"](.*?)['"]"#).expect("Invalid regex")
    })
}

/// HTTP verb of a route declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `router.get`
    Get,
    /// `router.post`
    Post,
    /// `router.put`
    Put,
    /// `router.delete`
    Delete,
}

impl HttpMethod {
    /// Parse the lowercase verb used in `router.<verb>(`
    #[must_use]
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }

    /// Uppercase method name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verb and path pulled out of a route file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDeclaration {
    /// HTTP verb
    pub method: HttpMethod,
    /// Path literal exactly as written, e.g. `/dashboard/:id`
    pub path: String,
    /// File the declaration was found in
    pub source: PathBuf,
}

impl RouteDeclaration {
    /// Identifier derived from the path, see [`derive_identifier`]
    #[must_use]
    pub fn identifier(&self) -> String {
        derive_identifier(&self.path)
    }
}

impl fmt::Display for RouteDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Turn a route path into a function/file identifier
///
/// `/` and `-` become `_`, parameter markers (`:`) are dropped, and leading or
/// trailing underscores are trimmed. Distinct paths can collapse to the same
/// identifier (`/a-b` and `/a/b`); nothing here prevents that.
///
/// # Examples
///
/// ```
/// # use aidkit::routes::derive_identifier;
/// assert_eq!(derive_identifier("/foo/:id"), "foo_id");
/// assert_eq!(derive_identifier("/dashboard-stats"), "dashboard_stats");
/// assert_eq!(derive_identifier("/"), "index");
/// ```
#[must_use]
pub fn derive_identifier(path: &str) -> String {
    let replaced: String = path
        .chars()
        .filter(|c| *c != ':')
        .map(|c| if c == '/' || c == '-' { '_' } else { c })
        .collect();

    let trimmed = replaced.trim_matches('_');
    if trimmed.is_empty() {
        ROOT_IDENTIFIER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Extract every route declaration from a file's text, in source order
#[must_use]
pub fn extract_routes(source_text: &str, source: &Path) -> Vec<RouteDeclaration> {
    route_pattern()
        .captures_iter(source_text)
        .filter_map(|caps| {
            let method = HttpMethod::from_verb(&caps[1])?;
            Some(RouteDeclaration {
                method,
                path: caps[2].to_string(),
                source: source.to_path_buf(),
            })
        })
        .collect()
}

/// Finds route files and extracts their declarations
#[derive(Debug, Clone)]
pub struct RouteScanner {
    extension: String,
    recursive: bool,
}

impl RouteScanner {
    /// Scan files with the given extension (without the dot)
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            recursive: false,
        }
    }

    /// Descend into subdirectories
    #[must_use]
    pub const fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// List route files under `dir`, sorted by path
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` does not exist or cannot be read.
    pub fn discover_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        if self.recursive {
            for entry in WalkDir::new(dir).sort_by_file_name() {
                let entry = entry?;
                if entry.file_type().is_file() && self.matches(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else {
            let entries = fs::read_dir(dir).map_err(|e| AidkitError::io(dir, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| AidkitError::io(dir, e))?;
                let path = entry.path();
                if path.is_file() && self.matches(&path) {
                    files.push(path);
                }
            }
        }

        files.sort();
        tracing::debug!(dir = %dir.display(), count = files.len(), "Discovered route files");
        Ok(files)
    }

    /// Extract all declarations from every route file under `dir`
    ///
    /// Declarations are returned file by file in path order, and in source
    /// order within a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or any route file cannot be read.
    pub fn scan_dir(&self, dir: &Path) -> Result<Vec<RouteDeclaration>> {
        let mut routes = Vec::new();

        for file in self.discover_files(dir)? {
            let text = fs::read_to_string(&file).map_err(|e| AidkitError::io(&file, e))?;
            let found = extract_routes(&text, &file);
            tracing::debug!(file = %file.display(), routes = found.len(), "Scanned route file");
            routes.extend(found);
        }

        Ok(routes)
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.to_string_lossy() == self.extension.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const USER_ROUTES: &str = r"
const express = require('express');
const router = express.Router();

router.post('/register', userController.createUser);
router.get('/profile', auth, userController.getProfile);
router.put('/profile', auth, userController.updateProfile);
router.delete('/:id', auth, isAdmin, userController.deleteUser);
router.get('/dashboard/:id', auth, userController.getClientDashboard);
router.use('/auth', authRoutes);

module.exports = router;
";

    #[test]
    fn test_identifier_from_parameterized_path() {
        assert_eq!(derive_identifier("/foo/:id"), "foo_id");
        assert_eq!(derive_identifier("/dashboard/:id"), "dashboard_id");
        assert_eq!(derive_identifier("/users/:id/roles"), "users_id_roles");
    }

    #[test]
    fn test_identifier_replaces_hyphens() {
        assert_eq!(derive_identifier("/by-role"), "by_role");
        assert_eq!(derive_identifier("/service-workers/:id"), "service_workers_id");
    }

    #[test]
    fn test_identifier_for_root_path() {
        assert_eq!(derive_identifier("/"), ROOT_IDENTIFIER);
        assert_eq!(derive_identifier(""), ROOT_IDENTIFIER);
        assert_eq!(derive_identifier("/:id"), "id");
    }

    #[test]
    fn test_extract_single_declaration() {
        let routes = extract_routes("router.get('/foo/:id')", Path::new("foo.js"));
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].method, HttpMethod::Get);
        assert_eq!(routes[0].path, "/foo/:id");
        assert_eq!(routes[0].identifier(), "foo_id");
        assert_eq!(routes[0].source, PathBuf::from("foo.js"));
    }

    #[test]
    fn test_extract_in_source_order_and_skips_use() {
        let routes = extract_routes(USER_ROUTES, Path::new("users.js"));
        let summary: Vec<String> = routes.iter().map(ToString::to_string).collect();
        assert_eq!(
            summary,
            vec![
                "POST /register",
                "GET /profile",
                "PUT /profile",
                "DELETE /:id",
                "GET /dashboard/:id",
            ]
        );
    }

    #[test]
    fn test_extract_double_quotes() {
        let routes = extract_routes(r#"router.put("/settings/email", h)"#, Path::new("a.js"));
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].method, HttpMethod::Put);
        assert_eq!(routes[0].path, "/settings/email");
    }

    #[test]
    fn test_extract_requires_literal_right_after_paren() {
        let routes = extract_routes("router.get( '/spaced', h); router.patch('/p', h);", Path::new("a.js"));
        assert!(routes.is_empty());
    }

    #[test]
    fn test_discover_files_flat_and_recursive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("users.js"), USER_ROUTES).unwrap();
        fs::write(dir.path().join("README.md"), "router.get('/nope')").unwrap();
        fs::create_dir(dir.path().join("v2")).unwrap();
        fs::write(dir.path().join("v2").join("auth.js"), "router.post('/login', h);").unwrap();

        let flat = RouteScanner::new("js").discover_files(dir.path()).unwrap();
        assert_eq!(flat, vec![dir.path().join("users.js")]);

        let deep = RouteScanner::new("js")
            .recursive(true)
            .discover_files(dir.path())
            .unwrap();
        assert_eq!(deep.len(), 2);
        assert!(deep.contains(&dir.path().join("v2").join("auth.js")));
    }

    #[test]
    fn test_scan_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let result = RouteScanner::new("js").scan_dir(&dir.path().join("missing"));
        assert!(matches!(result, Err(AidkitError::Io { .. })));
    }

    #[test]
    fn test_method_round_trip() {
        for verb in ["get", "post", "put", "delete"] {
            let method = HttpMethod::from_verb(verb).unwrap();
            assert_eq!(method.as_str().to_lowercase(), verb);
        }
        assert!(HttpMethod::from_verb("patch").is_none());
    }
}
