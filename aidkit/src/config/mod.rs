//! Configuration management for aidkit
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `AIDKIT_` prefix, `__` for nesting)
//! 2. `./aidkit.toml`
//! 3. `~/.config/aidkit/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # aidkit.toml
//! [database]
//! host = "localhost"
//! port = 3306
//! user = "root"
//! password = "secret"
//! database = "inclusiveaid"
//!
//! [controllers]
//! routes_dir = "inclusive-aid/backend/src/routes"
//! output_dir = "inclusive-aid/backend/src/controllers"
//! recursive = true
//!
//! [scaffold]
//! root = "inclusive-aid/frontend"
//!
//! [logging]
//! filter = "info,aidkit=debug"
//! format = "compact"
//! ```
//!
//! The password can be supplied without touching disk:
//! `AIDKIT_DATABASE__PASSWORD=secret aidkit tables`.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlConnectOptions;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

/// Name of the project-local configuration file
pub const LOCAL_CONFIG_FILE: &str = "aidkit.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "AIDKIT_";

/// MySQL connection settings
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Server host name
    pub host: String,

    /// Server port
    pub port: u16,

    /// User name
    pub user: String,

    /// Password (never logged)
    pub password: String,

    /// Schema whose tables are listed
    pub database: String,

    /// Seconds to wait for a connection before giving up
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            database: "inclusiveaid".to_string(),
            connect_timeout_secs: 10,
        }
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl DatabaseSettings {
    /// Build `sqlx` connection options from these settings
    #[must_use]
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }

    /// Connection timeout as a [`Duration`]
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Controller generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    /// Directory containing Express route files
    pub routes_dir: PathBuf,

    /// Directory receiving generated controllers
    pub output_dir: PathBuf,

    /// Extension of route files to scan (without the dot)
    pub extension: String,

    /// Descend into subdirectories of `routes_dir`
    pub recursive: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            routes_dir: PathBuf::from("inclusive-aid/backend/src/routes"),
            output_dir: PathBuf::from("inclusive-aid/backend/src/controllers"),
            extension: "js".to_string(),
            recursive: false,
        }
    }
}

/// Front-end scaffold settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldSettings {
    /// Project root the scaffold is written into
    pub root: PathBuf,
}

impl Default for ScaffoldSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

/// Component reorganization settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReorganizeSettings {
    /// Front-end root containing `src/components`
    pub root: PathBuf,
}

impl Default for ReorganizeSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human friendly
    #[default]
    Pretty,
    /// Single-line, human friendly
    Compact,
    /// One JSON object per event
    Json,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,

    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "warn,aidkit=info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Complete aidkit configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AidkitConfig {
    /// Database connection
    #[serde(default)]
    pub database: DatabaseSettings,

    /// Controller generation
    #[serde(default)]
    pub controllers: ControllerSettings,

    /// Front-end scaffold
    #[serde(default)]
    pub scaffold: ScaffoldSettings,

    /// Component reorganization
    #[serde(default)]
    pub reorganize: ReorganizeSettings,

    /// Logging
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl AidkitConfig {
    /// Load configuration from the standard locations
    ///
    /// Precedence, highest first:
    /// 1. Environment variables (`AIDKIT_*`, use `__` for nesting)
    /// 2. `./aidkit.toml`
    /// 3. `~/.config/aidkit/config.toml`
    /// 4. Defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self> {
        let mut figment = Self::defaults()?;

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        let config = figment.merge(Self::env()).extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Defaults fill in anything the file omits and environment variables
    /// override everything.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or a value has the wrong
    /// type. A missing file is treated as empty.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::defaults()?
            .merge(Toml::file(path.as_ref()))
            .merge(Self::env())
            .extract()?;

        Ok(config)
    }

    /// Get the recommended XDG config path
    ///
    /// Falls back to `./aidkit.toml` when no config directory is known.
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(LOCAL_CONFIG_FILE),
            |config_dir| config_dir.join("aidkit").join("config.toml"),
        )
    }

    fn defaults() -> Result<Figment> {
        let defaults = toml::to_string(&Self::default())?;
        Ok(Figment::new().merge(Toml::string(&defaults)))
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX).split("__").lowercase(true)
    }
}
