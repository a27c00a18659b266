//! Key-value store configuration.

use serde::{Deserialize, Serialize};

/// No-op backend used when nothing else is configured.
pub const DUMMY_KVSTORE: &str = "dummy";

/// Key-value store settings, consumed by the kvstore layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KvStoreConfig {
    /// Backend identifier: dummy, cache, redis...
    #[serde(rename = "type")]
    pub kind: String,

    /// Prefix prepended to every key
    pub prefix: String,

    pub redis: Option<RedisConfig>,
}

impl Default for KvStoreConfig {
    fn default() -> Self {
        Self {
            kind: DUMMY_KVSTORE.to_string(),
            prefix: String::new(),
            redis: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub password: String,
    pub db: i64,
}
