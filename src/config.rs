//! Configuration System
//!
//! Builds the service configuration from one source (a document on disk or an inline
//! JSON body), layered as: hardcoded defaults < source document < `PICFIT_` environment
//! overrides. Sub-configurations owned by other subsystems (engine, storage, kvstore,
//! logger) are guaranteed present after a successful load.

use crate::engine::EngineConfig;
use crate::error::LoadError;
use crate::kvstore::KvStoreConfig;
use crate::logging::LoggerConfig;
use crate::storage::StorageConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

mod defaults;
mod facade;
mod merge;
mod sources;

pub use defaults::{
    default_config, default_user_agent, DEFAULT_MIMETYPE_DETECTOR, DEFAULT_PORT,
    DEFAULT_SHARD_DEPTH, DEFAULT_SHARD_REST_ONLY, DEFAULT_SHARD_WIDTH, DEFAULT_USER_AGENT,
};
pub use facade::ConfigLoader;
pub use sources::environment::{EnvOverlay, ENV_PREFIX};

/// Root configuration structure
///
/// Built once at startup and read-only afterwards; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub debug: bool,
    pub engine: EngineConfig,
    pub sentry: Option<Sentry>,
    pub secret_key: String,
    pub shard: Shard,
    pub port: u16,
    pub options: Options,
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub storage: StorageConfig,
    #[serde(rename = "kvstore")]
    pub kv_store: KvStoreConfig,
    pub logger: LoggerConfig,
}

/// Placement of uploaded files in a prefix tree.
///
/// With depth 2 and width 1, the key `abcdef` lands in `a/b/cdef` when `rest_only`
/// is set, in `a/b/abcdef` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shard {
    /// Number of directory levels
    pub depth: usize,

    /// Characters consumed per level
    pub width: usize,

    /// Use only the remainder of the key as the filename
    pub rest_only: bool,
}

/// Feature toggles and behavioral knobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub enable_upload: bool,
    pub enable_delete: bool,
    pub enable_stats: bool,

    /// Output sizes accepted by the service; empty allows any size
    pub allowed_sizes: Vec<AllowedSize>,

    /// User agent sent when fetching remote sources
    pub default_user_agent: String,

    /// Mimetype detection strategy identifier
    pub mimetype_detector: String,
}

/// One permitted output dimension pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowedSize {
    pub height: u32,
    pub width: u32,
}

/// Error reporting sink
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sentry {
    pub dsn: String,
    pub tags: HashMap<String, String>,
}

/// Load configuration from a document on disk, format inferred from its extension,
/// with overrides from the process environment.
pub fn load(path: impl AsRef<Path>) -> Result<Config, LoadError> {
    ConfigLoader::new().load(path)
}

/// Load configuration from an inline JSON body, with overrides from the process
/// environment.
pub fn load_from_content(content: &str) -> Result<Config, LoadError> {
    ConfigLoader::new().load_from_content(content)
}
