//! Post-decode fixes applied to the decoded tree before it becomes a `Config`.

use crate::config::{Config, Options, Sentry, Shard};
use crate::engine::EngineConfig;
use crate::kvstore::KvStoreConfig;
use crate::logging::LoggerConfig;
use crate::storage::StorageConfig;
use serde::Deserialize;
use tracing::debug;

/// Shape of the merged tree as decoded, before collaborator sections are back-filled.
///
/// `shard`, `options` and `port` are seeded by the merge policy, but a document can
/// still null them out (`"shard": null`), so every section is optional here and falls
/// back to its default.
#[derive(Debug, Deserialize)]
pub(crate) struct DecodedConfig {
    #[serde(default)]
    pub debug: bool,
    pub engine: Option<EngineConfig>,
    pub sentry: Option<Sentry>,
    #[serde(default)]
    pub secret_key: String,
    pub shard: Option<Shard>,
    pub port: Option<u16>,
    pub options: Option<Options>,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default)]
    pub allowed_methods: Vec<String>,
    #[serde(default)]
    pub allowed_headers: Vec<String>,
    pub storage: Option<StorageConfig>,
    #[serde(rename = "kvstore")]
    pub kv_store: Option<KvStoreConfig>,
    pub logger: Option<LoggerConfig>,
}

/// Back-fill absent sections from `defaults`.
///
/// The engine is never seeded into the merge layer, so an omitted `engine` section
/// decodes to `None` and is replaced whole by the engine default here.
pub(crate) fn apply(decoded: DecodedConfig, defaults: Config) -> Config {
    let Config {
        engine: default_engine,
        shard: default_shard,
        port: default_port,
        options: default_options,
        storage: default_storage,
        kv_store: default_kv_store,
        logger: default_logger,
        ..
    } = defaults;

    Config {
        debug: decoded.debug,
        engine: backfill("engine", decoded.engine, default_engine),
        sentry: decoded.sentry,
        secret_key: decoded.secret_key,
        shard: backfill("shard", decoded.shard, default_shard),
        port: backfill("port", decoded.port, default_port),
        options: backfill("options", decoded.options, default_options),
        allowed_origins: decoded.allowed_origins,
        allowed_methods: decoded.allowed_methods,
        allowed_headers: decoded.allowed_headers,
        storage: backfill("storage", decoded.storage, default_storage),
        kv_store: backfill("kvstore", decoded.kv_store, default_kv_store),
        logger: backfill("logger", decoded.logger, default_logger),
    }
}

fn backfill<T>(section: &str, decoded: Option<T>, default: T) -> T {
    decoded.unwrap_or_else(|| {
        debug!(section, "Section absent from source, using default");
        default
    })
}
