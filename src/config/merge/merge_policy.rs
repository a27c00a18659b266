//! Merge rules: seeded defaults, override order.

use crate::config::Config;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a fresh builder seeded with the pre-registered defaults.
///
/// Only `options`, `shard`, `port` and `kvstore.type` are seeded field by field, so a
/// document can override one field of those sections and keep the rest. The engine is
/// deliberately not seeded; see `post_process`.
pub fn builder_with_defaults(
    defaults: &Config,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let options = &defaults.options;
    let shard = &defaults.shard;

    config::Config::builder()
        .set_default("port", i64::from(defaults.port))?
        .set_default("kvstore.type", defaults.kv_store.kind.as_str())?
        .set_default("shard.depth", shard.depth as i64)?
        .set_default("shard.width", shard.width as i64)?
        .set_default("shard.rest_only", shard.rest_only)?
        .set_default("options.enable_upload", options.enable_upload)?
        .set_default("options.enable_delete", options.enable_delete)?
        .set_default("options.enable_stats", options.enable_stats)?
        .set_default(
            "options.default_user_agent",
            options.default_user_agent.as_str(),
        )?
        .set_default(
            "options.mimetype_detector",
            options.mimetype_detector.as_str(),
        )
}
