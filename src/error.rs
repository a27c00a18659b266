//! Error types for the picfit configuration core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading a configuration.
///
/// Every variant is terminal for the load call: no `Config` is returned alongside it.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Configuration file not found: {}", path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported configuration format: {} (expected one of json, toml, yaml, yml, ini, ron, json5)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[source] config::ConfigError),

    #[error("Configuration decode error: {0}")]
    Decode(#[source] config::ConfigError),
}

/// Errors produced while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Invalid log format: {0} (must be 'json' or 'text')")]
    InvalidFormat(String),

    #[error("Invalid log output: {0} (must be 'stdout', 'stderr' or 'file')")]
    InvalidOutput(String),

    #[error("Invalid log directive: {0}")]
    InvalidDirective(String),

    #[error("Failed to open log file {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}
