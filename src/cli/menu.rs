//! Interactive course planner menu
//!
//! The classic four-option loop: load a catalog file, print the sorted
//! course list, look up one course, exit. Lookup input is case normalized
//! per settings before it reaches the catalog, which itself never
//! normalizes anything.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::time::Instant;

use itertools::Itertools;
use tracing::debug;

use crate::catalog::CourseCatalog;
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{CatalogError, Course};
use crate::loader::load_courses;
use crate::util::path::expand_user_path;

/// Loop state for one interactive session.
pub struct MenuSession {
    catalog: CourseCatalog,
    settings: Settings,
    last_loaded: Option<PathBuf>,
}

impl MenuSession {
    pub fn new(settings: Settings) -> Self {
        Self {
            catalog: CourseCatalog::new(),
            settings,
            last_loaded: None,
        }
    }

    /// Run the menu loop until the user exits or stdin closes.
    pub fn run(&mut self, preload: Option<&Path>) -> CliResult<()> {
        if let Some(path) = preload {
            self.load(path);
        }

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print_menu();
            let Some(choice) = read_line(&mut lines)? else {
                break;
            };

            match choice.trim() {
                "1" => self.handle_load(&mut lines)?,
                "2" => self.print_course_list(),
                "3" => self.handle_lookup(&mut lines)?,
                "9" => {
                    println!("Thank you for using the course planner!");
                    break;
                }
                other => println!("{} is not a valid option.", other),
            }
        }

        println!("Good bye.");
        Ok(())
    }

    fn handle_load(&mut self, lines: &mut impl Iterator<Item = io::Result<String>>) -> CliResult<()> {
        output::prompt(&"Enter the file name:");
        let Some(raw) = read_line(lines)? else {
            return Ok(());
        };

        let raw = raw.trim();
        if raw.is_empty() {
            // Fall back to the last loaded file, then the configured default
            match self.last_loaded.clone().or_else(|| self.settings.catalog_path.clone()) {
                Some(path) => self.load(&path),
                None => output::warning(&"no file name given and no default configured"),
            }
        } else {
            self.load(&expand_user_path(raw));
        }
        Ok(())
    }

    fn load(&mut self, path: &Path) {
        println!("Loading CSV file {}", path.display());
        let started = Instant::now();

        match load_courses(path, &mut self.catalog) {
            Ok(summary) => {
                self.last_loaded = Some(path.to_path_buf());
                debug!(loaded = summary.loaded, skipped = summary.skipped, "load finished");
                println!("Courses loaded successfully.");
                if summary.skipped > 0 {
                    output::warning(&format!("{} malformed lines skipped", summary.skipped));
                }
                println!("time: {:.3} seconds", started.elapsed().as_secs_f64());
            }
            Err(e) => output::error(&e),
        }
    }

    fn print_course_list(&self) {
        println!("Here is a sample schedule:");
        println!();
        for course in self.catalog.iter() {
            println!("{}", course);
        }
        println!();
    }

    fn handle_lookup(&self, lines: &mut impl Iterator<Item = io::Result<String>>) -> CliResult<()> {
        output::prompt(&"What course do you want to know about?");
        let Some(raw) = read_line(lines)? else {
            return Ok(());
        };

        let key = normalize_key(raw.trim(), &self.settings);
        match self.catalog.find(&key) {
            Some(course) => print_course_detail(course),
            None => println!("Course Id {} not found.", key),
        }
        println!();
        Ok(())
    }
}

/// Print one course with its prerequisite list.
pub fn print_course_detail(course: &Course) {
    println!("{}", format_course_detail(course));
}

/// Detail view: `id, title`, plus a prerequisite line when any exist.
pub fn format_course_detail(course: &Course) -> String {
    if course.prerequisites.is_empty() {
        course.to_string()
    } else {
        format!(
            "{}\nPrerequisites: {}",
            course,
            course.prerequisites.iter().join(", ")
        )
    }
}

/// Case-normalize a lookup key per settings.
pub fn normalize_key(raw: &str, settings: &Settings) -> String {
    if settings.uppercase_ids {
        raw.to_uppercase()
    } else {
        raw.to_string()
    }
}

fn print_menu() {
    println!("Welcome to the course planner.");
    println!("  1. Load Data Structure.");
    println!("  2. Print Course List.");
    println!("  3. Print Course.");
    println!("  9. Exit");
    output::prompt(&"What would you like to do?");
}

fn read_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> CliResult<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line.map_err(CatalogError::Io)?)),
        None => Ok(None),
    }
}
