//! Application configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default base URL of the public article API.
pub const DEFAULT_API_BASE_URL: &str = "https://dev.to/api";

/// Number of recommended articles shown on the dashboard.
pub const DEFAULT_DASHBOARD_PAGE_SIZE: u32 = 6;

/// Root of `config.toml`.
///
/// Every field has a default, so a missing or partial file is valid.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the article API, without trailing slash.
    pub api_base_url: String,
    /// Page size of the dashboard's recommended articles.
    pub dashboard_page_size: u32,
    /// Location of the key-value storage file. `None` uses the data directory.
    pub storage_file: Option<PathBuf>,
    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            dashboard_page_size: DEFAULT_DASHBOARD_PAGE_SIZE,
            storage_file: None,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(r#"log_level = "debug""#).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.dashboard_page_size, 6);
        assert!(config.storage_file.is_none());
    }
}
