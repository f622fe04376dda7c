use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use devblog_core::config::AppConfig;
use devblog_core::identity::User;
use devblog_infrastructure::{
    ConfigService, HttpArticleRepository, JsonFileKeyValueStorage, LocalIdentitySession,
};

/// Collaborators shared by every command.
pub struct AppContext {
    pub config: AppConfig,
    pub repository: Arc<HttpArticleRepository>,
    pub storage: Arc<JsonFileKeyValueStorage>,
}

impl AppContext {
    /// Loads the configuration and wires the API client and storage.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let service = match config_path {
            Some(path) => ConfigService::new(path),
            None => ConfigService::new_default().context("Failed to locate config directory")?,
        };
        let config = service
            .load()
            .with_context(|| format!("Failed to load config from {}", service.path().display()))?;

        let storage = match &config.storage_file {
            Some(path) => JsonFileKeyValueStorage::new(path.clone()),
            None => JsonFileKeyValueStorage::new_default()
                .context("Failed to locate data directory")?,
        };

        Ok(Self {
            repository: Arc::new(HttpArticleRepository::new(config.api_base_url.clone())),
            storage: Arc::new(storage),
            config,
        })
    }

    /// Session for the `--user` flag; signed out when absent.
    pub fn session(&self, uid: Option<String>, display_name: Option<String>) -> LocalIdentitySession {
        match uid {
            Some(uid) => {
                let mut user = User::new(uid);
                if let Some(name) = display_name {
                    user = user.with_display_name(name);
                }
                LocalIdentitySession::signed_in(user)
            }
            None => LocalIdentitySession::new(),
        }
    }
}
