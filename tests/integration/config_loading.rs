//! Integration tests for loading configuration documents

use picfit::config::{AllowedSize, Config, Shard, DEFAULT_PORT};
use picfit::engine::EngineConfig;
use picfit::error::LoadError;
use picfit::kvstore::KvStoreConfig;
use std::sync::Arc;
use tempfile::TempDir;

use super::test_utils::{isolated_loader, loader_with_env, write_config};

const FULL_JSON: &str = r#"{
  "debug": true,
  "port": 8080,
  "secret_key": "hmac-secret",
  "engine": {"default_format": "jpeg", "quality": 85},
  "sentry": {"dsn": "https://key@sentry.example/2", "tags": {"service": "picfit"}},
  "shard": {"depth": 2, "width": 1, "rest_only": false},
  "options": {
    "enable_upload": true,
    "enable_delete": true,
    "enable_stats": true,
    "allowed_sizes": [{"height": 100, "width": 100}],
    "default_user_agent": "picfit-test",
    "mimetype_detector": "content"
  },
  "allowed_origins": ["https://a.example"],
  "allowed_methods": ["GET", "POST"],
  "allowed_headers": ["Content-Type"],
  "storage": {
    "source": {"type": "fs", "location": "/var/picfit/src"},
    "destination": {"type": "s3", "bucket_name": "thumbs", "region": "eu-west-1"}
  },
  "kvstore": {"type": "redis", "prefix": "picfit:", "redis": {"host": "127.0.0.1", "port": 6379, "db": 2}},
  "logger": {"level": "warn", "format": "json"}
}"#;

#[test]
fn test_load_full_json_document() {
    let (_dir, path) = write_config("picfit.json", FULL_JSON);
    let config = isolated_loader().load(&path).unwrap();

    assert!(config.debug);
    assert_eq!(config.port, 8080);
    assert_eq!(config.secret_key, "hmac-secret");
    assert_eq!(config.engine.default_format, "jpeg");
    assert_eq!(config.engine.quality, 85);
    assert_eq!(
        config.shard,
        Shard {
            depth: 2,
            width: 1,
            rest_only: false
        }
    );
    assert!(config.options.enable_upload);
    assert!(config.options.enable_delete);
    assert!(config.options.enable_stats);
    assert_eq!(
        config.options.allowed_sizes,
        vec![AllowedSize {
            height: 100,
            width: 100
        }]
    );
    assert_eq!(config.options.default_user_agent, "picfit-test");
    assert_eq!(config.options.mimetype_detector, "content");
    assert_eq!(config.allowed_methods, vec!["GET", "POST"]);
    assert_eq!(config.allowed_headers, vec!["Content-Type"]);

    let sentry = config.sentry.as_ref().unwrap();
    assert_eq!(sentry.tags.get("service").map(String::as_str), Some("picfit"));

    let source = config.storage.source.as_ref().unwrap();
    assert_eq!(source.kind, "fs");
    assert_eq!(source.location, "/var/picfit/src");
    let destination = config.storage.destination.as_ref().unwrap();
    assert_eq!(destination.bucket_name, "thumbs");

    assert_eq!(config.kv_store.kind, "redis");
    assert_eq!(config.kv_store.prefix, "picfit:");
    let redis = config.kv_store.redis.as_ref().unwrap();
    assert_eq!(redis.port, 6379);
    assert_eq!(redis.db, 2);

    assert_eq!(config.logger.level, "warn");
    assert_eq!(config.logger.format, "json");
}

#[test]
fn test_load_toml_document() {
    let (_dir, path) = write_config(
        "picfit.toml",
        r#"
port = 4000
secret_key = "toml-secret"

[options]
enable_delete = true

[kvstore]
type = "cache"
"#,
    );

    let config = isolated_loader().load(&path).unwrap();
    assert_eq!(config.port, 4000);
    assert_eq!(config.secret_key, "toml-secret");
    assert!(config.options.enable_delete);
    assert!(!config.options.enable_upload);
    assert_eq!(config.kv_store.kind, "cache");
    assert_eq!(config.engine, EngineConfig::default());
}

#[test]
fn test_load_yaml_document() {
    let (_dir, path) = write_config(
        "picfit.yml",
        r#"
port: 5000
shard:
  width: 3
allowed_origins:
  - "*"
"#,
    );

    let config = isolated_loader().load(&path).unwrap();
    assert_eq!(config.port, 5000);
    assert_eq!(config.shard.width, 3);
    assert_eq!(config.shard.depth, Shard::default().depth);
    assert_eq!(config.allowed_origins, vec!["*"]);
}

#[test]
fn test_document_without_engine_or_shard_uses_defaults() {
    let (_dir, path) = write_config("picfit.json", r#"{"debug": true}"#);
    let config = isolated_loader().load(&path).unwrap();

    assert_eq!(config.engine, EngineConfig::default());
    assert_eq!(config.shard, Shard::default());
    assert_eq!(config.kv_store, KvStoreConfig::default());
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn test_null_sections_use_defaults() {
    let config = isolated_loader()
        .load_from_content(r#"{"engine": null, "options": null, "shard": null, "port": null}"#)
        .unwrap();
    assert_eq!(config.engine, EngineConfig::default());
    assert_eq!(config.options, Config::default().options);
    assert_eq!(config.shard, Shard::default());
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn test_null_sections_still_take_overrides() {
    let config = loader_with_env(&[("PICFIT_SHARD__DEPTH", "3")])
        .load_from_content(r#"{"shard": null}"#)
        .unwrap();
    assert_eq!(config.shard.depth, 3);
    assert_eq!(config.shard.rest_only, Shard::default().rest_only);
}

#[test]
fn test_empty_engine_section_uses_default() {
    let config = isolated_loader()
        .load_from_content(r#"{"engine": {}}"#)
        .unwrap();
    assert_eq!(config.engine, EngineConfig::default());
}

#[test]
fn test_partial_engine_section_is_completed() {
    let config = isolated_loader()
        .load_from_content(r#"{"engine": {"format": "webp"}}"#)
        .unwrap();
    assert_eq!(config.engine.format, "webp");
    assert_eq!(config.engine.quality, EngineConfig::default().quality);
}

#[test]
fn test_load_missing_file_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let err = isolated_loader()
        .load(temp_dir.path().join("nope.json"))
        .unwrap_err();
    assert!(
        matches!(err, LoadError::ConfigNotFound { .. }),
        "got {:?}",
        err
    );
}

#[test]
fn test_load_unknown_extension() {
    let (_dir, path) = write_config("picfit.properties", "port=1");
    let err = isolated_loader().load(&path).unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
}

#[test]
fn test_load_invalid_json_file_is_parse_error() {
    let (_dir, path) = write_config("picfit.json", "{ not json");
    let err = isolated_loader().load(&path).unwrap_err();
    assert!(matches!(err, LoadError::ConfigParse(_)), "got {:?}", err);
}

#[test]
fn test_load_from_content_ignores_path_semantics() {
    // Inline content is JSON even when it looks like TOML.
    let err = isolated_loader()
        .load_from_content("port = 9000")
        .unwrap_err();
    assert!(matches!(err, LoadError::ConfigParse(_)));
}

#[test]
fn test_bad_shard_width_is_decode_error() {
    let err = isolated_loader()
        .load_from_content(r#"{"shard": {"width": "wide"}}"#)
        .unwrap_err();
    assert!(matches!(err, LoadError::Decode(_)), "got {:?}", err);
}

#[test]
fn test_loading_twice_is_idempotent() {
    let (_dir, path) = write_config("picfit.json", FULL_JSON);
    let loader = loader_with_env(&[("PICFIT_PORT", "8181")]);

    let first = loader.load(&path).unwrap();
    let second = loader.load(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_loads_are_isolated() {
    let handles: Vec<_> = (0..8u16)
        .map(|i| {
            std::thread::spawn(move || {
                let port = (9000 + i).to_string();
                let loader = loader_with_env(&[("PICFIT_PORT", port.as_str())]);
                let config = loader
                    .load_from_content(r#"{"options": {"enable_stats": true}}"#)
                    .unwrap();
                (i, config)
            })
        })
        .collect();

    for handle in handles {
        let (i, config) = handle.join().unwrap();
        assert_eq!(config.port, 9000 + i);
        assert!(config.options.enable_stats);
    }
}

#[test]
fn test_loaded_config_is_shareable() {
    let config: Arc<Config> = Arc::new(isolated_loader().load_from_content("{}").unwrap());
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let config = Arc::clone(&config);
            std::thread::spawn(move || config.port)
        })
        .collect();

    for reader in readers {
        assert_eq!(reader.join().unwrap(), DEFAULT_PORT);
    }
}
