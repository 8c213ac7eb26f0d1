// ABOUTME: Configuration for the booking client: backend endpoint, studio
// ABOUTME: identity shown in the UI, and terminal behavior knobs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// Backend connection
    #[serde(default)]
    pub api: ApiConfig,

    /// Studio identity shown on screens and confirmations
    #[serde(default)]
    pub studio: StudioConfig,

    /// Terminal behavior
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the studio backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; expiry surfaces as a normal error
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Studio name for the banner and status bar
    #[serde(default = "default_studio_name")]
    pub name: String,

    /// Location line printed on the booking confirmation
    #[serde(default = "default_studio_location")]
    pub location: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            name: default_studio_name(),
            location: default_studio_location(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Seconds between automatic carousel rotations on the home screen
    #[serde(default = "default_carousel_interval_secs")]
    pub carousel_interval_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            carousel_interval_secs: default_carousel_interval_secs(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_studio_name() -> String {
    "Lotus Wellness Studio".to_string()
}

fn default_studio_location() -> String {
    "Our Holistic Wellness Center".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_carousel_interval_secs() -> u64 {
    6
}

impl AppConfig {
    /// Load configuration from default locations, later files winning,
    /// then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        for path in Self::config_paths() {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config from {}", path.display()))?;
                config = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config from {}", path.display()))?;
            }
        }

        config.override_base_url(std::env::var("LOTUS_API_URL").ok());
        Ok(config)
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::user_dir()?;
        fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        Ok(())
    }

    /// Replace the backend URL when an override is present and non-empty.
    pub fn override_base_url(&mut self, url: Option<String>) {
        if let Some(url) = url {
            if !url.trim().is_empty() {
                self.api.base_url = url;
            }
        }
    }

    /// Configuration file paths in order of precedence, lowest first
    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        if let Ok(user_dir) = Self::user_dir() {
            paths.push(user_dir.join("config.toml"));
        }

        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".lotus").join("config.toml"));
        }

        paths
    }

    /// User data directory (~/.lotus)
    pub fn user_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".lotus"))
    }

    /// Directory for JSONL log files (~/.lotus/logs)
    pub fn log_dir() -> Result<PathBuf> {
        Ok(Self::user_dir()?.join("logs"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            api: ApiConfig::default(),
            studio: StudioConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_point_at_the_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.studio.location, "Our Holistic Wellness Center");
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn test_partial_file_fills_missing_fields_from_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://studio.example"
            "#,
        )
        .expect("partial config parses");
        assert_eq!(config.api.base_url, "https://studio.example");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.studio.name, "Lotus Wellness Studio");
    }

    #[test]
    fn test_round_trips_through_toml() {
        let mut config = AppConfig::default();
        config.api.base_url = "http://studio.local:9000".to_string();
        config.ui.carousel_interval_secs = 10;

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, toml::to_string_pretty(&config).expect("serializes"))
            .expect("writes config");

        let loaded: AppConfig =
            toml::from_str(&fs::read_to_string(&path).expect("reads config"))
                .expect("parses config");
        assert_eq!(loaded.api, config.api);
        assert_eq!(loaded.ui, config.ui);
    }

    #[test]
    fn test_env_override_replaces_base_url_only_when_set() {
        let mut config = AppConfig::default();
        config.override_base_url(None);
        assert_eq!(config.api.base_url, "http://localhost:5000");

        config.override_base_url(Some("  ".to_string()));
        assert_eq!(config.api.base_url, "http://localhost:5000");

        config.override_base_url(Some("http://studio.example".to_string()));
        assert_eq!(config.api.base_url, "http://studio.example");
    }
}
