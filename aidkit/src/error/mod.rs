//! Error types and error handling

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AidkitError>;

/// Crate error type
#[derive(Debug, Error)]
pub enum AidkitError {
    /// Configuration could not be loaded or extracted
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Default configuration could not be serialized
    #[error("Configuration error: {0}")]
    ConfigDefaults(#[from] toml::ser::Error),

    /// Connecting to or querying the database failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A filesystem operation failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path the operation was acting on
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Walking a directory tree failed
    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Rendering a template failed
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// The table selection entered by the user is invalid
    #[error("Invalid selection: {0}")]
    Selection(#[from] SelectionError),
}

impl AidkitError {
    /// Wrap an [`std::io::Error`] with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<figment::Error> for AidkitError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Problems with a comma-separated, 1-based table selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Nothing was entered
    #[error("no table numbers were entered")]
    Empty,

    /// A token is not a number
    #[error("'{token}' is not a table number")]
    InvalidIndex {
        /// The offending token, trimmed
        token: String,
    },

    /// A number falls outside the listed tables
    #[error("table number {index} is out of range (1-{len})")]
    OutOfRange {
        /// The 1-based number that was entered
        index: usize,
        /// Number of tables in the menu
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = AidkitError::io(
            "routes/users.js",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let message = err.to_string();
        assert!(message.contains("routes/users.js"));
        assert!(message.contains("missing"));
    }

    #[test]
    fn test_out_of_range_message() {
        let err = SelectionError::OutOfRange { index: 9, len: 3 };
        assert_eq!(err.to_string(), "table number 9 is out of range (1-3)");
    }

    #[test]
    fn test_selection_error_converts() {
        let err: AidkitError = SelectionError::Empty.into();
        assert!(matches!(err, AidkitError::Selection(SelectionError::Empty)));
    }
}
