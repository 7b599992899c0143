//! Application configuration loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::bundler::BundleError;

/// Application configuration file structure (`lamina.json`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Page title text
    pub app_title: String,

    /// Dependency script URLs, rendered as script references in order
    pub dependencies: Vec<String>,
}

/// Load configuration from a JSON file.
///
/// Errors on a missing or malformed file; the bundler maps the error
/// branch to [`AppConfig::default`] so downstream code only ever sees an
/// empty config, never a missing one.
pub fn load_config(path: &Path) -> Result<AppConfig, BundleError> {
    let content = fs::read_to_string(path)
        .map_err(|e| BundleError::Config(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| BundleError::Config(format!("{}: {}", path.display(), e)))
}
