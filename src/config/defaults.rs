//! Hardcoded defaults: the baseline every load starts from.

use super::{Config, Options, Shard};
use crate::engine::EngineConfig;
use crate::kvstore::KvStoreConfig;
use crate::logging::LoggerConfig;
use crate::storage::StorageConfig;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_USER_AGENT: &str = "picfit";
pub const DEFAULT_MIMETYPE_DETECTOR: &str = "extension";
pub const DEFAULT_SHARD_WIDTH: usize = 0;
pub const DEFAULT_SHARD_DEPTH: usize = 0;
pub const DEFAULT_SHARD_REST_ONLY: bool = true;

/// `picfit/<version>`
pub fn default_user_agent() -> String {
    format!("{}/{}", DEFAULT_USER_AGENT, crate::VERSION)
}

/// Baseline configuration with every field set.
pub fn default_config() -> Config {
    Config {
        debug: false,
        engine: EngineConfig::default(),
        sentry: None,
        secret_key: String::new(),
        shard: Shard::default(),
        port: DEFAULT_PORT,
        options: Options::default(),
        allowed_origins: Vec::new(),
        allowed_methods: Vec::new(),
        allowed_headers: Vec::new(),
        storage: StorageConfig::default(),
        kv_store: KvStoreConfig::default(),
        logger: LoggerConfig::default(),
    }
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

impl Default for Shard {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SHARD_DEPTH,
            width: DEFAULT_SHARD_WIDTH,
            rest_only: DEFAULT_SHARD_REST_ONLY,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            enable_upload: false,
            enable_delete: false,
            enable_stats: false,
            allowed_sizes: Vec::new(),
            default_user_agent: default_user_agent(),
            mimetype_detector: DEFAULT_MIMETYPE_DETECTOR.to_string(),
        }
    }
}
