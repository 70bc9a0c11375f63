//! Error type for config loading and page output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading site configuration or writing rendered output.
#[derive(Debug, Error)]
pub enum SiteError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::SiteConfig`].
    #[error("invalid config {path}: {source}")]
    ParseConfig {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// The rendered page could not be written.
    #[error("failed to write {path}: {source}")]
    WriteOutput {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, SiteError>;
