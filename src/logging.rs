//! Logging System
//!
//! Structured logging using the `tracing` crate. The subscriber is configured from the
//! `logger` section of the service configuration.

use crate::error::LoggingError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a full `EnvFilter` directive string. Wins over `level`.
pub const LOG_FILTER_ENV: &str = "PICFIT_LOG";

/// Logger configuration (`logger` key)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Log level: trace, debug, info, warn, error, off
    pub level: String,

    /// Output format: json, text
    pub format: String,

    /// Output destination: stderr, stdout, file
    pub output: String,

    /// Log file path, required when output is "file"
    pub file: Option<PathBuf>,

    /// Enable colored output (text format on a terminal stream only)
    pub color: bool,

    /// Module-specific log levels
    pub modules: HashMap<String, String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            output: "stderr".to_string(),
            file: None,
            color: true,
            modules: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogOutput {
    Stdout,
    Stderr,
    File,
}

/// Initialize the global tracing subscriber.
///
/// `debug` is the service-wide debug flag: it raises an `info` (default) level to `debug`.
/// An explicit `PICFIT_LOG` filter overrides both.
pub fn init_logging(config: &LoggerConfig, debug: bool) -> Result<(), LoggingError> {
    let filter = build_env_filter(config, debug)?;
    let format = parse_format(&config.format)?;
    let output = parse_output(&config.output)?;

    let writer = match output {
        LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
        LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogOutput::File => BoxMakeWriter::new(Mutex::new(open_log_file(config)?)),
    };

    let base_subscriber = Registry::default().with(filter);

    let installed = match format {
        LogFormat::Json => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Text => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color && output != LogOutput::File)
                    .with_writer(writer),
            )
            .try_init(),
    };

    installed.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

fn open_log_file(config: &LoggerConfig) -> Result<std::fs::File, LoggingError> {
    let path = config
        .file
        .clone()
        .ok_or_else(|| LoggingError::InvalidOutput("file (logger.file is not set)".to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| LoggingError::File {
                path: path.clone(),
                source,
            })?;
        }
    }

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LoggingError::File { path, source })
}

/// Build the filter from `PICFIT_LOG` or from the configured level and module directives.
fn build_env_filter(config: &LoggerConfig, debug: bool) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_FILTER_ENV) {
        return Ok(filter);
    }

    let level = effective_level(config, debug)?;
    if level == LevelFilter::OFF {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level.to_string());
    for (module, module_level) in &config.modules {
        let directive = format!("{}={}", module, module_level);
        filter = filter.add_directive(
            directive
                .parse()
                .map_err(|e| LoggingError::InvalidDirective(format!("{}: {}", directive, e)))?,
        );
    }

    Ok(filter)
}

fn effective_level(config: &LoggerConfig, debug: bool) -> Result<LevelFilter, LoggingError> {
    let level = LevelFilter::from_str(config.level.trim())
        .map_err(|_| LoggingError::InvalidLevel(config.level.clone()))?;

    if debug && level != LevelFilter::OFF && level < LevelFilter::DEBUG {
        return Ok(LevelFilter::DEBUG);
    }
    Ok(level)
}

fn parse_format(format: &str) -> Result<LogFormat, LoggingError> {
    match format {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::InvalidFormat(other.to_string())),
    }
}

fn parse_output(output: &str) -> Result<LogOutput, LoggingError> {
    match output {
        "stdout" => Ok(LogOutput::Stdout),
        "stderr" => Ok(LogOutput::Stderr),
        "file" => Ok(LogOutput::File),
        other => Err(LoggingError::InvalidOutput(other.to_string())),
    }
}
