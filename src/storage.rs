//! Storage backend configuration.
//!
//! Opaque to the configuration core: decoded as-is and handed to the storage layer.

use serde::{Deserialize, Serialize};

/// Source and destination storages. Either side may be omitted; the storage layer
/// decides what an absent side means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub source: Option<StorageBackendConfig>,
    pub destination: Option<StorageBackendConfig>,
}

/// One storage backend (filesystem, s3, gcs, http...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageBackendConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub base_url: String,
    pub region: String,
    pub acl: String,
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket_name: String,
}
