//! Bundle orchestration.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::{load_config, AppConfig};
use crate::page::{debug_document, release_document};
use crate::sources::{list_sources, read_source};

/// Configuration for a bundle run.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// Source scripts directory
    pub source_dir: PathBuf,

    /// Output directory for the debug document
    pub debug_dir: PathBuf,

    /// Output directory for the release document
    pub build_dir: PathBuf,

    /// Path to the JSON configuration file
    pub config_path: PathBuf,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src"),
            debug_dir: PathBuf::from("debug"),
            build_dir: PathBuf::from("build"),
            config_path: PathBuf::from("lamina.json"),
        }
    }
}

/// Result of a bundle run.
#[derive(Debug)]
pub struct BundleResult {
    /// Number of source scripts bundled
    pub scripts: usize,

    /// Number of configured dependency URLs
    pub dependencies: usize,

    /// Total bundle time in milliseconds
    pub duration_ms: u64,

    /// Path of the written debug document
    pub debug_path: PathBuf,

    /// Path of the written release document
    pub build_path: PathBuf,
}

/// Errors that can occur during bundling.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("Failed to read source: {0}")]
    Read(String),

    #[error("Failed to load config: {0}")]
    Config(String),

    #[error("Failed to write output: {0}")]
    Write(String),
}

/// Script bundler.
pub struct Bundler {
    config: BundleConfig,
}

impl Bundler {
    /// Create a new bundler.
    pub fn new(config: BundleConfig) -> Self {
        Self { config }
    }

    /// Bundle the source scripts into the debug and release documents.
    ///
    /// A missing or malformed config falls back to the empty default and
    /// a missing source directory falls back to an empty listing, both
    /// logged at warn level. Only write failures surface as errors.
    pub async fn build(&self) -> Result<BundleResult, BundleError> {
        let start = Instant::now();

        // Best-effort output directories; already-exists is not an error.
        for dir in [&self.config.debug_dir, &self.config.build_dir] {
            if let Err(e) = fs::create_dir_all(dir) {
                tracing::warn!("Failed to create {}: {}", dir.display(), e);
            }
        }

        let app_config = load_config(&self.config.config_path).unwrap_or_else(|e| {
            tracing::warn!("Using empty config: {}", e);
            AppConfig::default()
        });

        let sources = list_sources(&self.config.source_dir).unwrap_or_else(|e| {
            tracing::warn!("Using empty source listing: {}", e);
            Vec::new()
        });

        tracing::debug!(
            "Bundling {} scripts, {} dependencies",
            sources.len(),
            app_config.dependencies.len()
        );

        let debug_path = self.config.debug_dir.join("debug.html");
        let debug_html = debug_document(&app_config, &sources).to_markup();
        fs::write(&debug_path, debug_html)
            .map_err(|e| BundleError::Write(format!("{}: {}", debug_path.display(), e)))?;

        let contents = sources
            .iter()
            .map(|name| read_source(&self.config.source_dir, name))
            .collect::<Result<Vec<_>, _>>()?;

        let build_path = self.config.build_dir.join("app.html");
        let app_html = release_document(&app_config, &contents).to_markup();
        fs::write(&build_path, app_html)
            .map_err(|e| BundleError::Write(format!("{}: {}", build_path.display(), e)))?;

        Ok(BundleResult {
            scripts: sources.len(),
            dependencies: app_config.dependencies.len(),
            duration_ms: start.elapsed().as_millis() as u64,
            debug_path,
            build_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config_in(root: &std::path::Path) -> BundleConfig {
        BundleConfig {
            source_dir: root.join("src"),
            debug_dir: root.join("debug"),
            build_dir: root.join("build"),
            config_path: root.join("lamina.json"),
        }
    }

    #[tokio::test]
    async fn bundles_simple_project() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("x.js"), "console.log(1)").unwrap();
        fs::write(
            temp.path().join("lamina.json"),
            r#"{"appTitle": "T", "dependencies": ["a.js"]}"#,
        )
        .unwrap();

        let result = Bundler::new(config_in(temp.path())).build().await.unwrap();
        assert_eq!(result.scripts, 1);
        assert_eq!(result.dependencies, 1);

        let debug = fs::read_to_string(temp.path().join("debug").join("debug.html")).unwrap();
        assert!(debug.contains(r#"<script type="text/javascript" src="../src/x.js"></script>"#));
        assert!(debug.contains(r#"<script type="text/javascript" src="a.js"></script>"#));
        assert!(debug.contains("<title>"));
        assert!(debug.contains("T"));

        let app = fs::read_to_string(temp.path().join("build").join("app.html")).unwrap();
        assert!(app.contains("console.log(1)"));
        assert!(app.contains(r#"<script type="text/javascript" src="a.js"></script>"#));
    }

    #[tokio::test]
    async fn release_joins_sources_with_newline() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.js"), "1").unwrap();
        fs::write(src.join("b.js"), "2").unwrap();

        Bundler::new(config_in(temp.path())).build().await.unwrap();

        let app = fs::read_to_string(temp.path().join("build").join("app.html")).unwrap();
        assert!(app.contains("            1\n            2\n"));
    }

    #[tokio::test]
    async fn missing_config_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("x.js"), "1").unwrap();

        let result = Bundler::new(config_in(temp.path())).build().await.unwrap();
        assert_eq!(result.dependencies, 0);

        let debug = fs::read_to_string(temp.path().join("debug").join("debug.html")).unwrap();
        assert!(debug.contains("<title></title>"));
    }

    #[tokio::test]
    async fn missing_source_dir_produces_empty_documents() {
        let temp = tempdir().unwrap();

        let result = Bundler::new(config_in(temp.path())).build().await.unwrap();
        assert_eq!(result.scripts, 0);

        let debug = fs::read_to_string(temp.path().join("debug").join("debug.html")).unwrap();
        assert!(!debug.contains("<script"));

        let app = fs::read_to_string(temp.path().join("build").join("app.html")).unwrap();
        assert!(!app.contains("<script"));
    }

    #[tokio::test]
    async fn output_dirs_may_already_exist() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("debug")).unwrap();
        fs::create_dir_all(temp.path().join("build")).unwrap();

        assert!(Bundler::new(config_in(temp.path())).build().await.is_ok());
    }
}
