use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_poll_interval_secs() -> u64 {
    5
}

fn default_page_size() -> usize {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the collection endpoint, without the `/routes` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Seconds between background re-synchronizations.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Default page size for the list view.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            poll_interval_secs: default_poll_interval_secs(),
            page_size: default_page_size(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path();
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".routedeck").join("config.toml");
        }
        PathBuf::from(".routedeck").join("config.toml")
    }

    /// Resolve the endpoint base URL by priority:
    /// 1. explicit flag (`--url`)
    /// 2. `ROUTEDECK_URL` environment variable
    /// 3. configuration file value
    pub fn resolve_base_url(&self, explicit: Option<&str>) -> String {
        if let Some(url) = explicit {
            return url.to_string();
        }
        if let Ok(env_url) = std::env::var("ROUTEDECK_URL") {
            return env_url;
        }
        self.base_url.clone()
    }

    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.poll_interval_secs, 5);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn save_and_load_round_trip() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            base_url: "http://example.test/api".to_string(),
            poll_interval_secs: 30,
            page_size: 25,
        };
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.base_url, "http://example.test/api");
        assert_eq!(loaded.poll_interval_secs, 30);
        assert_eq!(loaded.page_size, 25);
        Ok(())
    }

    #[test]
    fn missing_file_yields_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config.page_size, 10);
        Ok(())
    }

    #[test]
    fn partial_file_fills_in_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "base_url = \"http://other/api\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.base_url, "http://other/api");
        assert_eq!(loaded.poll_interval_secs, 5);
        Ok(())
    }

    #[test]
    fn explicit_url_wins() {
        let config = Config::default();
        assert_eq!(
            config.resolve_base_url(Some("http://flag/api")),
            "http://flag/api"
        );
    }
}
