//! Tests for catalog file loading

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crsplan::util::testing;
use crsplan::{load_courses, CatalogError, CourseCatalog};

fn write_catalog_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write catalog file");
    path
}

#[test]
fn given_wellformed_csv_when_loading_then_listing_and_lookup_match() {
    // Arrange
    testing::init_test_setup();
    let temp = TempDir::new().unwrap();
    let path = write_catalog_file(
        &temp,
        "courses.csv",
        "CS201,Data Structures,CS101\nCS101,Intro to CS\n",
    );

    // Act
    let mut catalog = CourseCatalog::new();
    let summary = load_courses(&path, &mut catalog).unwrap();

    // Assert
    assert_eq!(summary.loaded, 2);
    assert_eq!(summary.skipped, 0);

    let listing: Vec<String> = catalog.iter().map(|c| c.to_string()).collect();
    assert_eq!(listing, ["CS101, Intro to CS", "CS201, Data Structures"]);

    let course = catalog.find("CS201").unwrap();
    assert_eq!(course.prerequisites, ["CS101"]);
}

#[test]
fn given_malformed_and_empty_lines_when_loading_then_they_are_skipped() {
    let temp = TempDir::new().unwrap();
    let path = write_catalog_file(
        &temp,
        "courses.csv",
        "CS101,Intro to CS\nBADLINE\n\nCS201,Data Structures,CS101\n",
    );

    let mut catalog = CourseCatalog::new();
    let summary = load_courses(&path, &mut catalog).unwrap();

    assert_eq!(summary.loaded, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(catalog.len(), 2);
}

#[test]
fn given_empty_trailing_fields_when_loading_then_prerequisites_drop_empties() {
    let temp = TempDir::new().unwrap();
    let path = write_catalog_file(&temp, "courses.csv", "CS300,Algorithms,CS201,,CS101,\n");

    let mut catalog = CourseCatalog::new();
    load_courses(&path, &mut catalog).unwrap();

    let course = catalog.find("CS300").unwrap();
    assert_eq!(course.prerequisites, ["CS201", "CS101"]);
}

#[test]
fn given_crlf_line_endings_when_loading_then_titles_carry_no_carriage_return() {
    let temp = TempDir::new().unwrap();
    let path = write_catalog_file(&temp, "courses.csv", "CS101,Intro to CS\r\nCS201,Data Structures\r\n");

    let mut catalog = CourseCatalog::new();
    let summary = load_courses(&path, &mut catalog).unwrap();

    assert_eq!(summary.loaded, 2);
    assert_eq!(catalog.find("CS101").unwrap().title, "Intro to CS");
}

#[test]
fn given_missing_file_when_loading_then_errors_and_catalog_unchanged() {
    let mut catalog = CourseCatalog::new();

    let result = load_courses(Path::new("/nonexistent/courses.csv"), &mut catalog);

    assert!(matches!(result, Err(CatalogError::FileNotFound(_))));
    assert!(catalog.is_empty());
}

#[test]
fn given_file_loaded_twice_when_enumerating_then_every_course_appears_twice() {
    // Loading never clears: re-loading the same file attaches duplicates
    let temp = TempDir::new().unwrap();
    let path = write_catalog_file(&temp, "courses.csv", "CS101,Intro to CS\n");

    let mut catalog = CourseCatalog::new();
    load_courses(&path, &mut catalog).unwrap();
    load_courses(&path, &mut catalog).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.iter().filter(|c| c.id == "CS101").count(), 2);
}
