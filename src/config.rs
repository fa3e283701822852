//! Environment configuration
//!
//! Everything is read from process environment variables (with `.env`
//! support in the binary). Only `API_KEY` is required; the rest have
//! sensible defaults.

use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

use crate::news::default_categories;

/// Default HTTP port when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Default cache file when `CACHE_FILE` is unset
pub const DEFAULT_CACHE_FILE: &str = "newsCache.json";

/// Default static pages directory when `PUBLIC_DIR` is unset
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// An environment variable holds an unparseable value
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Process configuration assembled from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream API key, sent as the `x-api-key` header
    pub api_key: String,
    /// HTTP port to listen on
    pub port: u16,
    /// Path of the persisted cache file
    pub cache_file: PathBuf,
    /// Directory the static HTML pages are served from
    pub public_dir: PathBuf,
    /// Category allow-list
    pub categories: Vec<String>,
}

impl Config {
    /// Loads configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds a config from an environment lookup function
    ///
    /// Taking the lookup as a parameter keeps this testable without mutating
    /// process-wide environment state.
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = var("API_KEY").ok_or(ConfigError::MissingVar("API_KEY"))?;

        let port = match var("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value,
            })?,
            None => {
                info!("PORT not set, using default: {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        let cache_file = var("CACHE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_FILE));

        let public_dir = var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR));

        let categories = match var("CATEGORIES") {
            Some(value) => {
                let parsed: Vec<String> = value
                    .split(',')
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect();
                if parsed.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: "CATEGORIES",
                        value,
                    });
                }
                parsed
            }
            None => default_categories(),
        };

        Ok(Self {
            api_key,
            port,
            cache_file,
            public_dir,
            categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn load_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars = env_of(pairs);
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let result = load_from(&[]);
        assert!(matches!(result, Err(ConfigError::MissingVar("API_KEY"))));
    }

    #[test]
    fn test_defaults_apply_when_only_api_key_is_set() {
        let config = load_from(&[("API_KEY", "secret")]).expect("Config should load");

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.cache_file, PathBuf::from("newsCache.json"));
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.categories, vec!["politics".to_string()]);
    }

    #[test]
    fn test_port_override() {
        let config =
            load_from(&[("API_KEY", "secret"), ("PORT", "4000")]).expect("Config should load");
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let result = load_from(&[("API_KEY", "secret"), ("PORT", "not-a-port")]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "PORT", .. })
        ));
    }

    #[test]
    fn test_categories_parse_as_comma_separated_list() {
        let config = load_from(&[("API_KEY", "secret"), ("CATEGORIES", "politics, tech,sports")])
            .expect("Config should load");
        assert_eq!(config.categories, vec!["politics", "tech", "sports"]);
    }

    #[test]
    fn test_blank_categories_value_is_an_error() {
        let result = load_from(&[("API_KEY", "secret"), ("CATEGORIES", " , ")]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "CATEGORIES", .. })
        ));
    }
}
