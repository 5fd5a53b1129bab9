//! crsplan: BST-backed course catalog planner
//!
//! Parses comma-delimited course files into an ordered in-memory catalog
//! and serves sorted listings and prerequisite lookups, either through the
//! interactive menu or one-shot subcommands.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod loader;
pub mod util;

pub use catalog::CourseCatalog;
pub use config::Settings;
pub use domain::{CatalogError, CatalogResult, Course};
pub use loader::{load_courses, LoadSummary};
