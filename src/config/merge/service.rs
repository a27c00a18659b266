//! MergeService: layers defaults, document and environment, decodes to `Config`.

use super::merge_policy;
use super::post_process::{self, DecodedConfig};
use crate::config::defaults::default_config;
use crate::config::sources::environment::EnvOverlay;
use crate::config::Config;
use crate::error::LoadError;
use tracing::debug;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Merge a parsed document with defaults and the environment overlay, then decode.
    ///
    /// Precedence: defaults (lowest) -> document -> environment (highest). Each call
    /// builds its own merge context; nothing is shared between calls.
    pub fn merge(document: config::Config, overlay: &EnvOverlay) -> Result<Config, LoadError> {
        let defaults = default_config();

        let builder = merge_policy::builder_with_defaults(&defaults).map_err(LoadError::Decode)?;
        debug!("Configuration defaults seeded");

        let builder = builder.add_source(document).add_source(overlay.clone());
        let merged = builder.build().map_err(LoadError::Decode)?;
        debug!("Environment overlay applied");

        let decoded: DecodedConfig = merged.try_deserialize().map_err(LoadError::Decode)?;
        debug!("Configuration decoded");

        let config = post_process::apply(decoded, defaults);
        debug!(port = config.port, "Configuration ready");
        Ok(config)
    }
}
