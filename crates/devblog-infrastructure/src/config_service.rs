//! Configuration service implementation.
//!
//! Loads [`AppConfig`] from `config.toml` (platform config directory unless a
//! path is given) and applies environment overrides.

use std::fs;
use std::path::PathBuf;

use devblog_core::config::AppConfig;
use devblog_core::error::{DevBlogError, Result};
use tracing::{debug, info};

use crate::paths::DevBlogPaths;

/// Overrides `api_base_url`.
pub const ENV_API_URL: &str = "DEVBLOG_API_URL";
/// Overrides `log_level`.
pub const ENV_LOG_LEVEL: &str = "DEVBLOG_LOG_LEVEL";

/// Loads the application configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Service reading `path`.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Service reading the platform default `config.toml`.
    pub fn new_default() -> Result<Self> {
        let path = DevBlogPaths::config_file().map_err(|e| DevBlogError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Reads the file (defaults if missing) and applies environment overrides.
    pub fn load(&self) -> Result<AppConfig> {
        let config = self.load_file()?;
        Ok(apply_overrides(config, |key| std::env::var(key).ok()))
    }

    /// Reads the file only. A missing or blank file yields defaults.
    pub fn load_file(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        let config: AppConfig = toml::from_str(&content)?;
        info!(path = %self.path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Writes `config` back to the file, creating parent directories.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string_pretty(config)?)?;
        Ok(())
    }
}

/// Applies `DEVBLOG_*` overrides looked up through `lookup`.
pub fn apply_overrides<F>(mut config: AppConfig, lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
        config.api_base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
        config.log_level = level;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use devblog_core::config::DEFAULT_API_BASE_URL;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(temp_dir.path().join("config.toml"));
        assert_eq!(service.load_file().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(temp_dir.path().join("devblog").join("config.toml"));

        let config = AppConfig {
            dashboard_page_size: 12,
            storage_file: Some(temp_dir.path().join("kv.json")),
            ..AppConfig::default()
        };
        service.save(&config).unwrap();

        assert_eq!(service.load_file().unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "dashboard_page_size = \"many\"").unwrap();

        let err = ConfigService::new(path).load_file().unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_env_overrides() {
        let config = apply_overrides(AppConfig::default(), |key| match key {
            ENV_API_URL => Some("http://localhost:3000/api/".to_string()),
            ENV_LOG_LEVEL => Some("debug".to_string()),
            _ => None,
        });
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
        assert_eq!(config.log_level, "debug");

        let untouched = apply_overrides(AppConfig::default(), |_| None);
        assert_eq!(untouched.api_base_url, DEFAULT_API_BASE_URL);
    }
}
