//! Image engine configuration.
//!
//! Owned by the image engine; the configuration core only guarantees it is present
//! after a load.

use serde::{Deserialize, Serialize};

/// Output format used when neither the request nor `format` names one.
pub const DEFAULT_FORMAT: &str = "png";

/// Encoding quality applied when a request does not specify one.
pub const DEFAULT_QUALITY: u8 = 95;

/// Image engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fallback output format
    pub default_format: String,

    /// Forced output format; empty keeps the source format
    pub format: String,

    /// Encoding quality, 1 to 100
    pub quality: u8,

    /// Upper bound on the in-memory buffer used for a single image (bytes, 0 = unbounded)
    pub max_buffer_size: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_format: DEFAULT_FORMAT.to_string(),
            format: String::new(),
            quality: DEFAULT_QUALITY,
            max_buffer_size: 0,
        }
    }
}
