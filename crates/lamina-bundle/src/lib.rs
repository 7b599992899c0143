//! Static script bundler.
//!
//! Reads a JSON configuration, enumerates source script files, and emits
//! two HTML documents: a debug document referencing each source file
//! individually and a release document inlining their contents into a
//! single embedded script.

pub mod bundler;
pub mod config;
pub mod page;
pub mod sources;

pub use bundler::{BundleConfig, BundleError, BundleResult, Bundler};
pub use config::AppConfig;
