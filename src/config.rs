//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/crsplan/crsplan.toml`
//! 3. Environment variables: `CRSPLAN_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::domain::{CatalogError, CatalogResult};

/// Unified configuration for crsplan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Default catalog file for the interactive menu
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// Uppercase course ids typed at the prompt before lookup
    pub uppercase_ids: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            uppercase_ids: true,
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified", so a sparse global config inherits defaults).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    catalog_path: Option<PathBuf>,
    uppercase_ids: Option<bool>,
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> CatalogResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Merge overlay config onto self (base): overlay wins if Some.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            catalog_path: overlay
                .catalog_path
                .clone()
                .or_else(|| self.catalog_path.clone()),
            uppercase_ids: overlay.uppercase_ids.unwrap_or(self.uppercase_ids),
        }
    }

    /// Apply CRSPLAN_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> CatalogResult<Self> {
        // Use config crate just for env var parsing
        let builder = Config::builder().add_source(Environment::with_prefix("CRSPLAN"));
        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("catalog_path") {
            settings.catalog_path = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_bool("uppercase_ids") {
            settings.uppercase_ids = val;
        }

        Ok(settings)
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(path) = &self.catalog_path {
            self.catalog_path = Some(crate::util::path::expand_user_path(
                path.to_string_lossy().as_ref(),
            ));
        }
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> CatalogResult<RawSettings> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CatalogError::Config(format!("read {}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| CatalogError::Config(format!("parse {}: {}", path.display(), e)))
}

fn config_err(e: ConfigError) -> CatalogError {
    CatalogError::Config(e.to_string())
}

/// XDG config directory for crsplan.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "crsplan").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("crsplan.toml"))
}

/// Template written by `crsplan config init`.
pub const CONFIG_TEMPLATE: &str = r#"# crsplan configuration

# Default catalog file for the interactive menu
# catalog_path = "~/courses/catalog.csv"

# Uppercase course ids typed at the prompt before lookup
uppercase_ids = true
"#;
