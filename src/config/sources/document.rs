//! Document source: a configuration file on disk or an inline JSON body.
//!
//! Either way the result is a parsed key tree (`config::Config`) that the merge stage
//! layers between the defaults and the environment overlay.

use crate::error::LoadError;
use config::ConfigError;
use config::File;
use config::FileFormat;
use std::path::Path;
use tracing::debug;

/// Infer the document format from the file extension (case-insensitive).
pub fn format_for_path(path: &Path) -> Option<FileFormat> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "json" => Some(FileFormat::Json),
        "toml" => Some(FileFormat::Toml),
        "yaml" | "yml" => Some(FileFormat::Yaml),
        "ini" => Some(FileFormat::Ini),
        "ron" => Some(FileFormat::Ron),
        "json5" => Some(FileFormat::Json5),
        _ => None,
    }
}

/// Read and parse the document at `path`.
///
/// An unreadable path is reported before the extension is looked at, so a missing
/// file is always `ConfigNotFound`.
pub fn read_path(path: &Path) -> Result<config::Config, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::ConfigNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let format = format_for_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = String::from_utf8(bytes)
        .map_err(|e| LoadError::ConfigParse(ConfigError::Foreign(Box::new(e))))?;

    debug!(path = %path.display(), format = ?format, "Parsing configuration document");
    parse(&content, format)
}

/// Parse an inline body. Inline content is always JSON.
pub fn read_content(content: &str) -> Result<config::Config, LoadError> {
    debug!(bytes = content.len(), "Parsing inline configuration document");
    parse(content, FileFormat::Json)
}

fn parse(content: &str, format: FileFormat) -> Result<config::Config, LoadError> {
    config::Config::builder()
        .add_source(File::from_str(content, format))
        .build()
        .map_err(LoadError::ConfigParse)
}
