//! Lamina CLI - minimal static script bundler.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "lamina")]
#[command(about = "Minimal static script bundler")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Bundle source scripts into debug and release documents
    Build {
        /// Source scripts directory
        #[arg(short, long, default_value = "src")]
        source_dir: PathBuf,

        /// Path to JSON config file
        #[arg(short, long, default_value = "lamina.json")]
        config: PathBuf,

        /// Output directory for the debug document
        #[arg(long, default_value = "debug")]
        debug_dir: PathBuf,

        /// Output directory for the release document
        #[arg(long, default_value = "build")]
        build_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Build {
            source_dir,
            config,
            debug_dir,
            build_dir,
        } => {
            commands::build::run(source_dir, config, debug_dir, build_dir).await?;
        }
    }

    Ok(())
}
