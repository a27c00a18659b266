//! Picfit: configuration core for the picfit image processing service
//!
//! Builds one typed, fully-populated [`config::Config`] from a configuration document
//! (on disk or inline) layered over hardcoded defaults and `PICFIT_` environment overrides.

pub mod config;
pub mod engine;
pub mod error;
pub mod kvstore;
pub mod logging;
pub mod storage;

/// Version of the service, embedded in the default outbound user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
