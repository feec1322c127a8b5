use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::error::WeatherError;

/// Environment variable that takes precedence over the stored API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_LANG: &str = "kr";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// lang = "kr"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_key: Option<String>,

    /// Response language passed to OpenWeather as `lang`.
    pub lang: Option<String>,

    /// Override for the OpenWeather API root.
    pub base_url: Option<String>,

    /// HTTP timeout; the client library default applies when unset.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "nalssi", "nalssi")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Apply `OPENWEATHER_API_KEY` from the process environment, if set.
    pub fn with_env_overrides(self) -> Self {
        self.with_api_key_override(std::env::var(API_KEY_ENV).ok())
    }

    fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    /// The API key, or `MissingApiKey` so startup can fail fast.
    pub fn api_key(&self) -> Result<&str, WeatherError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(WeatherError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key.trim().to_string());
    }

    pub fn lang(&self) -> &str {
        self.lang.as_deref().unwrap_or(DEFAULT_LANG)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        assert!(matches!(err, WeatherError::MissingApiKey));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let mut cfg = Config::default();
        cfg.set_api_key("   ".into());

        assert!(cfg.api_key().is_err());
    }

    #[test]
    fn set_api_key_trims() {
        let mut cfg = Config::default();
        cfg.set_api_key(" KEY \n".into());

        assert_eq!(cfg.api_key().unwrap(), "KEY");
    }

    #[test]
    fn env_key_overrides_file_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        let cfg = cfg.with_api_key_override(Some("ENV_KEY".into()));
        assert_eq!(cfg.api_key().unwrap(), "ENV_KEY");
    }

    #[test]
    fn empty_env_key_is_ignored() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        let cfg = cfg.with_api_key_override(Some(String::new()));
        assert_eq!(cfg.api_key().unwrap(), "FILE_KEY");

        let cfg = cfg.with_api_key_override(None);
        assert_eq!(cfg.api_key().unwrap(), "FILE_KEY");
    }

    #[test]
    fn defaults_apply_when_fields_absent() {
        let cfg = Config::from_toml("api_key = \"abc\"").unwrap();

        assert_eq!(cfg.lang(), "kr");
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn toml_roundtrip_keeps_overrides() {
        let cfg = Config {
            api_key: Some("abc".into()),
            lang: Some("en".into()),
            base_url: Some("http://localhost:9000".into()),
            timeout_secs: Some(5),
        };

        let text = toml::to_string_pretty(&cfg).unwrap();
        let back = Config::from_toml(&text).unwrap();

        assert_eq!(back.lang(), "en");
        assert_eq!(back.base_url(), "http://localhost:9000");
        assert_eq!(back.timeout_secs, Some(5));
    }
}
