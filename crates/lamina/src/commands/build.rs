//! Bundle build command.

use std::path::PathBuf;

use anyhow::Result;
use lamina_bundle::{BundleConfig, Bundler};

/// Run the build command.
pub async fn run(
    source_dir: PathBuf,
    config_path: PathBuf,
    debug_dir: PathBuf,
    build_dir: PathBuf,
) -> Result<()> {
    tracing::info!("Bundling scripts...");

    let config = BundleConfig {
        source_dir,
        debug_dir,
        build_dir,
        config_path,
    };

    let result = Bundler::new(config).build().await?;

    tracing::info!(
        "Bundled {} scripts with {} dependencies in {}ms",
        result.scripts,
        result.dependencies,
        result.duration_ms
    );

    tracing::info!("Debug output: {}", result.debug_path.display());
    tracing::info!("Release output: {}", result.build_path.display());

    Ok(())
}
