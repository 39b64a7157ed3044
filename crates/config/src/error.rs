//! Error types for configuration operations.
//!
//! This module defines the error types that can occur while loading a
//! configuration file and producing its outward JSON projection.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
///
/// Any of these returned from [`Config::load_from`](crate::Config::load_from)
/// means the configuration must be discarded; no partially-defaulted value is
/// handed back.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to open or read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON, or a field has the wrong type.
    #[error("failed to parse config file at {path}: {source}")]
    Parse {
        /// The path of the file being decoded.
        path: PathBuf,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// A relative path could not be turned into an absolute one.
    #[error("failed to resolve path {path}: {source}")]
    ResolvePath {
        /// The path that could not be resolved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration to JSON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
