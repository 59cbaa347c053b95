use crate::error::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the remote endpoint, stored in .postbox/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Base URL of the remote resource API (no trailing slash needed)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RemoteConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StoreError::Io)?;
        let config: RemoteConfig =
            serde_json::from_str(&content).map_err(StoreError::Config)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StoreError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StoreError::Config)?;
        fs::write(config_path, content).map_err(StoreError::Io)?;
        Ok(())
    }

    /// Look up a config key by name
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "base-url" => Some(self.base_url.clone()),
            "timeout-secs" => Some(self.timeout_secs.to_string()),
            _ => None,
        }
    }

    /// Set a config key by name (values are validated, not persisted)
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "base-url" => {
                self.base_url = value.trim_end_matches('/').to_string();
                Ok(())
            }
            "timeout-secs" => match value.parse() {
                Ok(secs) => {
                    self.timeout_secs = secs;
                    Ok(())
                }
                Err(_) => Err(format!("timeout-secs must be a number, got '{}'", value)),
            },
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    /// Apply `POSTBOX_API_URL` and `POSTBOX_TIMEOUT_SECS` overrides, if set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("POSTBOX_API_URL") {
            if !url.is_empty() {
                self.base_url = url;
            }
        }
        if let Ok(secs) = std::env::var("POSTBOX_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                self.timeout_secs = secs;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = RemoteConfig::load(dir.path()).unwrap();
        assert_eq!(config, RemoteConfig::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = RemoteConfig {
            base_url: "http://localhost:8080".into(),
            timeout_secs: 5,
        };
        config.save(dir.path()).unwrap();

        let loaded = RemoteConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"base_url":"http://example.test"}"#,
        )
        .unwrap();

        let config = RemoteConfig::load(dir.path()).unwrap();
        assert_eq!(config.base_url, "http://example.test");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn set_and_get_known_keys() {
        let mut config = RemoteConfig::default();
        config.set("base-url", "http://localhost:8080/").unwrap();
        config.set("timeout-secs", "5").unwrap();

        assert_eq!(config.get("base-url").as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.get("timeout-secs").as_deref(), Some("5"));
    }

    #[test]
    fn set_rejects_unknown_keys_and_bad_values() {
        let mut config = RemoteConfig::default();
        assert!(config.set("retries", "3").is_err());
        assert!(config.set("timeout-secs", "soon").is_err());
        assert_eq!(config, RemoteConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();

        assert!(matches!(
            RemoteConfig::load(dir.path()),
            Err(StoreError::Config(_))
        ));
    }
}
