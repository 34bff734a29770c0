use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_BASE;

/// Application configuration loaded from environment variables.
///
/// Nothing is strictly required. A missing API key is forwarded to the provider
/// as an empty credential and fails there.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so tests need not touch
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            gemini_api_key: lookup("GEMINI_API_KEY")
                .or_else(|| lookup("API_KEY"))
                .unwrap_or_default(),
            gemini_api_base: lookup("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
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
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.gemini_api_key, "");
        assert_eq!(config.gemini_api_base, DEFAULT_API_BASE);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_gemini_key_takes_precedence_over_api_key() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "gemini"),
            ("API_KEY", "generic"),
        ]))
        .unwrap();
        assert_eq!(config.gemini_api_key, "gemini");
    }

    #[test]
    fn test_api_key_fallback() {
        let config = Config::from_lookup(lookup_from(&[("API_KEY", "generic")])).unwrap();
        assert_eq!(config.gemini_api_key, "generic");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_overrides_are_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_BASE", "http://localhost:9000"),
            ("PORT", "3000"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.gemini_api_base, "http://localhost:9000");
        assert_eq!(config.port, 3000);
        assert_eq!(config.rust_log, "debug");
    }
}
