//! Catalog file loading
//!
//! Reads a comma-delimited course file and inserts one course per accepted
//! line, in file order. Insertion order determines the final tree shape.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument};

use crate::catalog::CourseCatalog;
use crate::domain::{CatalogError, CatalogResult, Course};

/// Outcome of one load call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Courses inserted into the catalog
    pub loaded: usize,
    /// Lines rejected (fewer than two fields)
    pub skipped: usize,
}

/// Load every course from `path` into `catalog`.
///
/// Malformed lines are skipped and counted, never fatal. An unreadable file
/// errors out before anything is inserted.
#[instrument(level = "debug", skip(catalog))]
pub fn load_courses(path: &Path, catalog: &mut CourseCatalog) -> CatalogResult<LoadSummary> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut summary = LoadSummary {
        loaded: 0,
        skipped: 0,
    };

    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.is_empty() {
            continue;
        }

        match Course::parse_line(line) {
            Some(course) => {
                catalog.insert(course);
                summary.loaded += 1;
            }
            None => {
                debug!("skipping malformed line: {:?}", line);
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}
