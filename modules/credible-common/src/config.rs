use std::env;
use std::time::Duration;

use crate::error::CredibleError;

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LANGUAGE: &str = "en";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // NewsAPI
    pub news_api_key: String,
    pub news_api_base_url: String,
    pub news_api_timeout: Duration,
    pub news_api_language: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, CredibleError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. `from_env` is this over `std::env`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CredibleError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let news_api_key = lookup("NEWS_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                CredibleError::Config("NEWS_API_KEY environment variable is required".into())
            })?;

        let timeout_secs = match lookup("NEWS_API_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                CredibleError::Config(format!("NEWS_API_TIMEOUT_SECS must be a number, got {raw:?}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            news_api_key,
            news_api_base_url: lookup("NEWS_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            news_api_timeout: Duration::from_secs(timeout_secs),
            news_api_language: lookup("NEWS_API_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        })
    }

    /// Log the loaded configuration with secrets masked.
    pub fn log_redacted(&self) {
        tracing::info!(
            news_api_key = %redact(&self.news_api_key),
            news_api_base_url = %self.news_api_base_url,
            timeout_secs = self.news_api_timeout.as_secs(),
            language = %self.news_api_language,
            "Loaded configuration"
        );
    }
}

fn redact(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{visible}****")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = Config::from_lookup(lookup_from(&[("NEWS_API_KEY", "abc123")])).unwrap();
        assert_eq!(config.news_api_key, "abc123");
        assert_eq!(config.news_api_base_url, "https://newsapi.org/v2");
        assert_eq!(config.news_api_timeout, Duration::from_secs(10));
        assert_eq!(config.news_api_language, "en");
    }

    #[test]
    fn missing_key_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, CredibleError::Config(_)));
    }

    #[test]
    fn blank_key_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[("NEWS_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, CredibleError::Config(_)));
    }

    #[test]
    fn bad_timeout_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[
            ("NEWS_API_KEY", "abc123"),
            ("NEWS_API_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, CredibleError::Config(_)));
    }

    #[test]
    fn redact_keeps_only_prefix() {
        assert_eq!(redact("abcdef123"), "abcd****");
        assert_eq!(redact("ab"), "****");
    }
}
