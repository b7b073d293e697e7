use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::model::Location;

/// Environment variable that overrides the geocoding API key from the config file.
pub const API_KEY_ENV: &str = "FORECAST_GEOCODING_API_KEY";

pub const DEFAULT_FORECAST_BASE_URL: &str = "https://api.open-meteo.com";
pub const DEFAULT_GEOCODING_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// geocoding_api_key = "..."
/// http_timeout_secs = 10
///
/// [default_location]
/// city = "Helsinki"
/// latitude = 60.17
/// longitude = 24.94
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API key for the OpenWeatherMap geocoding endpoint.
    pub geocoding_api_key: Option<String>,
    pub forecast_base_url: String,
    pub geocoding_base_url: String,
    pub http_timeout_secs: u64,
    /// City shown on start-up when no `--city` is given.
    pub default_location: Option<Location>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_api_key: None,
            forecast_base_url: DEFAULT_FORECAST_BASE_URL.to_string(),
            geocoding_base_url: DEFAULT_GEOCODING_BASE_URL.to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            default_location: None,
        }
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_geocoding_api_key(&mut self, api_key: String) {
        let api_key = api_key.trim().to_string();
        self.geocoding_api_key = (!api_key.is_empty()).then_some(api_key);
    }

    /// Geocoding API key, taken from [`API_KEY_ENV`] first and the config file second.
    pub fn geocoding_api_key(&self) -> Result<String> {
        self.resolve_api_key(std::env::var(API_KEY_ENV).ok())
    }

    fn resolve_api_key(&self, from_env: Option<String>) -> Result<String> {
        from_env
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.geocoding_api_key.clone())
            .ok_or_else(|| {
                anyhow!(
                    "No geocoding API key configured.\n\
                     Hint: run `forecast configure` or set {API_KEY_ENV}."
                )
            })
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs.max(1))
    }

    /// Location used before the user searches for a city.
    pub fn start_location(&self) -> Location {
        self.default_location.clone().unwrap_or_default()
    }
}
