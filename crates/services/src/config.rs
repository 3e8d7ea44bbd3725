use std::env;
use std::path::PathBuf;
use std::time::Duration;

use lingo_core::model::Level;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_EXERCISE_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_LANGUAGE: &str = "Spanish";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the practice backend and the initial selection.
#[derive(Clone, Debug, PartialEq)]
pub struct PracticeConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub request_timeout: Duration,
    pub fallback_path: Option<PathBuf>,
    pub language: String,
    pub level: Level,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: None,
            model: DEFAULT_EXERCISE_MODEL.into(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            fallback_path: None,
            language: DEFAULT_LANGUAGE.into(),
            level: Level::A1,
        }
    }
}

impl PracticeConfig {
    /// Read settings from `LINGO_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is present but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(base_url) = get("LINGO_API_BASE_URL") {
            config.base_url = base_url.trim().trim_end_matches('/').to_string();
        }
        config.api_key = get("LINGO_API_KEY");
        if let Some(model) = get("LINGO_EXERCISE_MODEL") {
            config.model = model;
        }
        if let Some(raw) = get("LINGO_REQUEST_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    var: "LINGO_REQUEST_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
            config.request_timeout = Duration::from_secs(secs);
        }
        config.fallback_path = get("LINGO_FALLBACK_PATH").map(PathBuf::from);
        if let Some(language) = get("LINGO_LANGUAGE") {
            config.language = language.trim().to_string();
        }
        if let Some(level) = get("LINGO_LEVEL") {
            config.level = level.parse()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = PracticeConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, PracticeConfig::default());
    }

    #[test]
    fn reads_and_normalizes_values() {
        let config = PracticeConfig::from_lookup(lookup_from(&[
            ("LINGO_API_BASE_URL", "https://practice.example.com/ "),
            ("LINGO_API_KEY", "secret"),
            ("LINGO_REQUEST_TIMEOUT_SECS", "5"),
            ("LINGO_LANGUAGE", "French"),
            ("LINGO_LEVEL", "b1"),
            ("LINGO_FALLBACK_PATH", "/tmp/fallback.json"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://practice.example.com");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.language, "French");
        assert_eq!(config.level, Level::B1);
        assert_eq!(config.fallback_path, Some(PathBuf::from("/tmp/fallback.json")));
    }

    #[test]
    fn blank_api_key_counts_as_unset() {
        let config = PracticeConfig::from_lookup(lookup_from(&[("LINGO_API_KEY", "  ")])).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = PracticeConfig::from_lookup(lookup_from(&[("LINGO_REQUEST_TIMEOUT_SECS", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "LINGO_REQUEST_TIMEOUT_SECS", .. }));
    }

    #[test]
    fn rejects_unknown_level() {
        let err = PracticeConfig::from_lookup(lookup_from(&[("LINGO_LEVEL", "Z9")])).unwrap_err();
        assert!(matches!(err, ConfigError::Level(_)));
    }
}
