use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::catalog::CourseCatalog;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::menu::{print_course_detail, normalize_key, MenuSession};
use crate::cli::output;
use crate::config::{self, Settings};
use crate::domain::CatalogError;
use crate::loader::load_courses;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Menu { file }) => _menu(file.as_deref()),
        Some(Commands::List { file }) => _list(file),
        Some(Commands::Show { file, course_id }) => _show(file, course_id),
        Some(Commands::Tree { file }) => _tree(file),
        Some(Commands::Config { command }) => _config(command),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => _menu(None),
    }
}

#[instrument]
fn _menu(file: Option<&Path>) -> CliResult<()> {
    let settings = Settings::load()?;
    let preload = file
        .map(Path::to_path_buf)
        .or_else(|| settings.catalog_path.clone());
    let mut session = MenuSession::new(settings);
    session.run(preload.as_deref())
}

#[instrument]
fn _list(file: &Path) -> CliResult<()> {
    let catalog = load_catalog(file)?;
    for course in catalog.iter() {
        output::info(course);
    }
    Ok(())
}

#[instrument]
fn _show(file: &Path, course_id: &str) -> CliResult<()> {
    let settings = Settings::load()?;
    let catalog = load_catalog(file)?;
    let key = normalize_key(course_id, &settings);

    match catalog.find(&key) {
        Some(course) => {
            print_course_detail(course);
            Ok(())
        }
        None => Err(CliError::CourseNotFound(key)),
    }
}

#[instrument]
fn _tree(file: &Path) -> CliResult<()> {
    let catalog = load_catalog(file)?;
    output::header(&format!("Catalog: {}", file.display()));
    match catalog.to_tree_string() {
        Some(tree) => output::info(&tree),
        None => output::detail(&"(empty catalog)"),
    }
    output::detail(&format!(
        "{} courses, depth {}",
        catalog.len(),
        catalog.depth()
    ));
    Ok(())
}

fn _config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            let rendered = toml::to_string_pretty(&settings)
                .map_err(|e| CatalogError::Config(e.to_string()))?;
            output::info(&rendered);
            Ok(())
        }
        ConfigCommands::Path => {
            match config::global_config_path() {
                Some(path) => output::info(&path.display()),
                None => output::warning(&"cannot determine config directory"),
            }
            Ok(())
        }
        ConfigCommands::Init => {
            let path = config::global_config_path()
                .ok_or_else(|| CliError::InvalidArgs("cannot determine config directory".into()))?;
            if path.exists() {
                return Err(CliError::InvalidArgs(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(CatalogError::Io)?;
            }
            std::fs::write(&path, config::CONFIG_TEMPLATE).map_err(CatalogError::Io)?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
    }
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

fn load_catalog(file: &Path) -> CliResult<CourseCatalog> {
    let mut catalog = CourseCatalog::new();
    let summary = load_courses(file, &mut catalog)?;
    debug!(loaded = summary.loaded, skipped = summary.skipped, "catalog loaded");
    if summary.skipped > 0 {
        output::warning(&format!("{} malformed lines skipped", summary.skipped));
    }
    Ok(catalog)
}
