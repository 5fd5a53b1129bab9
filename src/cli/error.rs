//! CLI-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::CatalogError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("course id {0} not found")]
    CourseNotFound(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::CourseNotFound(_) => crate::exitcode::DATAERR,
            CliError::Catalog(e) => match e {
                CatalogError::FileNotFound(_) => crate::exitcode::NOINPUT,
                CatalogError::Io(_) => crate::exitcode::IOERR,
                CatalogError::Config(_) => crate::exitcode::CONFIG,
            },
        }
    }
}
