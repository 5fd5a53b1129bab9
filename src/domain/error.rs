//! Domain-level errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by catalog loading and configuration.
///
/// Lookups that miss are values (`Option`/`bool`), not errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read course file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
