//! Page Configuration
//!
//! Defaults can be overridden by the server through `data-*` attributes
//! on `<body>`, e.g. `<body data-apply-endpoint="/apply_corrections">`.

use log::LevelFilter;

use crate::error::ConfigError;
use crate::i18n::{LanguageCode, DEFAULT_LANGUAGE};

pub const DEFAULT_APPLY_ENDPOINT: &str = "/apply_corrections";
pub const DEFAULT_ALERT_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub apply_endpoint: String,
    pub alert_dismiss_ms: u32,
    pub default_language: LanguageCode,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            apply_endpoint: DEFAULT_APPLY_ENDPOINT.to_string(),
            alert_dismiss_ms: DEFAULT_ALERT_DISMISS_MS,
            default_language: LanguageCode::new(DEFAULT_LANGUAGE),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build from attribute lookups (`lookup("data-log-level")`), keeping
    /// defaults for anything absent or blank.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(endpoint) = get("data-apply-endpoint") {
            config.apply_endpoint = endpoint;
        }

        if let Some(raw) = get("data-alert-dismiss-ms") {
            config.alert_dismiss_ms = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "data-alert-dismiss-ms",
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = get("data-default-lang") {
            config.default_language = LanguageCode::parse(&raw).map_err(|_| ConfigError::InvalidValue {
                key: "data-default-lang",
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = get("data-log-level") {
            config.log_level = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "data-log-level",
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_attributes(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.apply_endpoint, "/apply_corrections");
        assert_eq!(config.alert_dismiss_ms, 5_000);
        assert_eq!(config.default_language.as_str(), "en");
    }

    #[test]
    fn test_overrides_from_body_attributes() {
        let map = attrs(&[
            ("data-apply-endpoint", "/api/apply"),
            ("data-alert-dismiss-ms", "8000"),
            ("data-default-lang", "de"),
            ("data-log-level", "debug"),
        ]);
        let config = AppConfig::from_attributes(|k| map.get(k).cloned()).unwrap();

        assert_eq!(config.apply_endpoint, "/api/apply");
        assert_eq!(config.alert_dismiss_ms, 8000);
        assert_eq!(config.default_language.as_str(), "de");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let map = attrs(&[("data-apply-endpoint", "   ")]);
        let config = AppConfig::from_attributes(|k| map.get(k).cloned()).unwrap();
        assert_eq!(config.apply_endpoint, DEFAULT_APPLY_ENDPOINT);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let map = attrs(&[("data-alert-dismiss-ms", "soon")]);
        let err = AppConfig::from_attributes(|k| map.get(k).cloned()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue { key: "data-alert-dismiss-ms", value: "soon".to_string() }
        );

        let map = attrs(&[("data-default-lang", "klingon")]);
        assert!(AppConfig::from_attributes(|k| map.get(k).cloned()).is_err());
    }
}
