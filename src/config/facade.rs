//! Public entry points for loading a configuration.

use super::merge::MergeService;
use super::sources::document;
use super::sources::environment::EnvOverlay;
use super::Config;
use crate::error::LoadError;
use std::path::Path;
use tracing::debug;

/// Loads a `Config` from exactly one source.
///
/// Loading is stateless: the same loader can be used repeatedly or from several
/// threads, and each call sees the environment as it is at that moment.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    overlay: EnvOverlay,
}

impl ConfigLoader {
    /// Loader overlaying the process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader overlaying the given environment instead of the process one.
    pub fn with_overlay(overlay: EnvOverlay) -> Self {
        Self { overlay }
    }

    /// Load from a document on disk; the format follows the file extension.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Config, LoadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading configuration from file");
        let document = document::read_path(path)?;
        MergeService::merge(document, &self.overlay)
    }

    /// Load from an inline JSON body.
    pub fn load_from_content(&self, content: &str) -> Result<Config, LoadError> {
        debug!("Loading configuration from inline content");
        let document = document::read_content(content)?;
        MergeService::merge(document, &self.overlay)
    }
}
