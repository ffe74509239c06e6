//! # sd-config
//!
//! Layered settings for the swipedeck binary. Priority, lowest first:
//! built-in defaults, an optional TOML file, `SWIPEDECK_*` environment
//! variables (`__` separates nested keys, e.g. `SWIPEDECK_FEED__PAGE_SIZE`).

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const ENV_PREFIX: &str = "SWIPEDECK";
/// Environment variable naming the settings file.
pub const CONFIG_PATH_VAR: &str = "SWIPEDECK_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "swipedeck.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub store: StoreConfig,
    pub remote: RemoteConfig,
    pub feed: FeedConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    /// The JSON file holding every profile state.
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteConfig {
    pub latency_ms: u64,
}

impl RemoteConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedConfig {
    pub page_size: usize,
    pub refill_threshold: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    /// Used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Settings {
    /// Reads `.env`, then builds settings from the file named by
    /// `SWIPEDECK_CONFIG` (default `swipedeck.toml`, optional) and the
    /// process environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        let file = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::from_sources(Some(Path::new(&file)), None)
    }

    /// `env` replaces the process environment when given.
    pub fn from_sources(
        file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("store.path", "data/profile_states.json")?
            .set_default("remote.latency_ms", 500_i64)?
            .set_default("feed.page_size", 10_i64)?
            .set_default("feed.refill_threshold", 5_i64)?
            .set_default("log.filter", "info")?;

        if let Some(file) = file {
            builder = builder.add_source(File::from(file).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.feed.page_size == 0 {
            return Err(ConfigError::Invalid("feed.page_size must be greater than zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_sources(None, env(&[])).unwrap();

        assert_eq!(settings.store.path, PathBuf::from("data/profile_states.json"));
        assert_eq!(settings.remote.latency(), Duration::from_millis(500));
        assert_eq!(settings.feed.page_size, 10);
        assert_eq!(settings.feed.refill_threshold, 5);
        assert_eq!(settings.log.filter, "info");
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::from_sources(Some(&dir.path().join("absent.toml")), env(&[])).unwrap();
        assert_eq!(settings.feed.page_size, 10);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swipedeck.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[store]\npath = \"/tmp/states.json\"\n\n[feed]\npage_size = 4").unwrap();

        let settings = Settings::from_sources(Some(&path), env(&[])).unwrap();

        assert_eq!(settings.store.path, PathBuf::from("/tmp/states.json"));
        assert_eq!(settings.feed.page_size, 4);
        assert_eq!(settings.feed.refill_threshold, 5);
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swipedeck.toml");
        std::fs::write(&path, "[feed]\npage_size = 4\n").unwrap();

        let settings = Settings::from_sources(
            Some(&path),
            env(&[
                ("SWIPEDECK_FEED__PAGE_SIZE", "20"),
                ("SWIPEDECK_REMOTE__LATENCY_MS", "0"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.feed.page_size, 20);
        assert_eq!(settings.remote.latency(), Duration::ZERO);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let result = Settings::from_sources(None, env(&[("SWIPEDECK_FEED__PAGE_SIZE", "0")]));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
