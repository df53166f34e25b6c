//! Server configuration from environment variables.
//!
//! - `FILELOCK_DB_PATH`: SQLite database file path (default: "filelock.db")
//! - `FILELOCK_PORT`: Server listen port (default: "3000")
//! - `FILELOCK_BASE_URL`: API base URL used in links (default: "http://localhost:{port}/")
//! - `FILELOCK_DIRECTORY`: optional JSON file seeding repositories and users
//! - `FILELOCK_LOCK_TYPES`: comma separated repository types with lock support (default: "git")

use std::path::PathBuf;

use crate::lock_command::DEFAULT_LOCK_TYPES;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid FILELOCK_PORT '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_path: String,
    pub port: u16,
    pub base_url: String,
    pub directory_path: Option<PathBuf>,
    pub lock_types: Vec<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("FILELOCK_DB_PATH").unwrap_or_else(|| "filelock.db".to_string());

        let port = match lookup("FILELOCK_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| SettingsError::InvalidPort(raw))?,
            None => 3000,
        };

        let base_url =
            lookup("FILELOCK_BASE_URL").unwrap_or_else(|| format!("http://localhost:{}/", port));

        let directory_path = lookup("FILELOCK_DIRECTORY")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let lock_types = lookup("FILELOCK_LOCK_TYPES")
            .map(|raw| {
                raw.split(',')
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| DEFAULT_LOCK_TYPES.iter().map(|t| t.to_string()).collect());

        Ok(Settings {
            db_path,
            port,
            base_url,
            directory_path,
            lock_types,
        })
    }
}
