//! Unified path management for DevBlog files.
//!
//! Directories are resolved with the `dirs` crate so every platform gets its
//! conventional location.

use std::path::PathBuf;

const APP_DIR: &str = "devblog";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for DevBlog.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/devblog/           # Config directory
/// └── config.toml              # Application configuration
///
/// ~/.local/share/devblog/      # Data directory
/// └── storage.json             # Key-value storage (saved articles, ...)
/// ```
pub struct DevBlogPaths;

impl DevBlogPaths {
    /// Returns the DevBlog configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/devblog/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the DevBlog data directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to data directory (e.g., `~/.local/share/devblog/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the key-value storage file.
    pub fn storage_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("storage.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file() {
        let Ok(config_file) = DevBlogPaths::config_file() else {
            return;
        };
        assert!(config_file.ends_with("devblog/config.toml"));
        let config_dir = DevBlogPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_storage_file() {
        let Ok(storage_file) = DevBlogPaths::storage_file() else {
            return;
        };
        assert!(storage_file.ends_with("storage.json"));
        let data_dir = DevBlogPaths::data_dir().unwrap();
        assert!(storage_file.starts_with(&data_dir));
    }
}
