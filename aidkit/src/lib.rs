//! aidkit - developer tooling for the InclusiveAid web stack
//!
//! Two independent tools live in this crate:
//!
//! - **Controller generation**: scans Express route files for
//!   `router.<verb>('<path>')` declarations and writes one handler template per
//!   route into the backend's controller directory. The MySQL table catalog is
//!   listed alongside so the developer can pick tables from a numbered menu.
//! - **Front-end scaffolding**: creates the Next.js directory tree and writes the
//!   static stylesheet, app wrapper, components, pages, and Tailwind config.
//!
//! A third helper, [`reorganize`], moves flat component files into category
//! folders and rewrites the imports that point at them.
//!
//! # Example
//!
//! ```rust,no_run
//! use aidkit::codegen::ControllerGenerator;
//! use aidkit::routes::RouteScanner;
//! use aidkit::writer::{write_all, WriteMode};
//! use std::path::Path;
//!
//! # fn example() -> aidkit::Result<()> {
//! let routes = RouteScanner::new("js").scan_dir(Path::new("backend/src/routes"))?;
//! let files = ControllerGenerator::new().generate(&routes)?;
//! write_all(Path::new("backend/src/controllers"), &files, WriteMode::Write)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::module_name_repetitions)]

pub mod codegen;
pub mod config;
pub mod database;
pub mod error;
pub mod observability;
pub mod reorganize;
pub mod routes;
pub mod scaffold;
pub mod selection;
pub mod writer;

pub use codegen::ControllerGenerator;
pub use config::AidkitConfig;
pub use database::{MySqlCatalog, StaticTables, TableSource};
pub use error::{AidkitError, Result, SelectionError};
pub use reorganize::ComponentReorganizer;
pub use routes::{HttpMethod, RouteDeclaration, RouteScanner};
pub use scaffold::ScaffoldWriter;
pub use writer::{GeneratedFile, WriteMode, WriteOutcome};
