//! Environment overlay: `PICFIT_` prefixed variables override any configuration key.
//!
//! The prefix is joined with `_`, nested key segments with `__`:
//! `port` -> `PICFIT_PORT`, `secret_key` -> `PICFIT_SECRET_KEY`,
//! `options.enable_upload` -> `PICFIT_OPTIONS__ENABLE_UPLOAD`.
//! Matching is case-insensitive. Values stay strings until decode, where each is
//! coerced to its field's type. CORS lists accept comma-separated values.

use config::ConfigError;
use config::Environment;
use config::Map;
use config::Source;
use config::Value;
use config::ValueKind;

pub const ENV_PREFIX: &str = "PICFIT";
const PREFIX_SEPARATOR: &str = "_";
const KEY_SEPARATOR: &str = "__";
const LIST_SEPARATOR: &str = ",";
const LIST_KEYS: [&str; 3] = ["allowed_origins", "allowed_methods", "allowed_headers"];

/// Where overlay variables come from.
///
/// The process environment is read on every load; an explicit variable set gives a
/// load call an isolated view that other threads cannot disturb.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverlay {
    vars: Option<Map<String, String>>,
}

impl EnvOverlay {
    /// Overlay backed by the process environment.
    pub fn from_process() -> Self {
        Self { vars: None }
    }

    /// Overlay backed by an explicit set of variables instead of the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Environment variable name overriding a dotted key path.
    pub fn variable_name(key_path: &str) -> String {
        let segments: Vec<String> = key_path
            .split('.')
            .map(|segment| segment.to_ascii_uppercase())
            .collect();
        format!(
            "{}{}{}",
            ENV_PREFIX,
            PREFIX_SEPARATOR,
            segments.join(KEY_SEPARATOR)
        )
    }

    fn environment(&self) -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(PREFIX_SEPARATOR)
            .separator(KEY_SEPARATOR)
            .source(self.vars.clone())
    }
}

impl Source for EnvOverlay {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    /// Collect overlay values as strings; list keys are split into string arrays.
    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        let mut collected = self.environment().collect()?;

        for key in LIST_KEYS {
            if let Some(value) = collected.remove(key) {
                let origin = value.origin().map(str::to_string);
                let raw = value.into_string()?;
                let items: Vec<Value> = raw
                    .split(LIST_SEPARATOR)
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(|item| Value::new(origin.as_ref(), ValueKind::String(item.to_string())))
                    .collect();
                collected.insert(
                    key.to_string(),
                    Value::new(origin.as_ref(), ValueKind::Array(items)),
                );
            }
        }

        Ok(collected)
    }
}
