//! Application state shared by all handlers.
//!
//! [`AppState`] holds the [`FileLockService`] and the directory used to
//! authenticate callers. Everything behind it is `Sync` and internally
//! synchronized (`DashMap`, per-call SQLite connections), so no outer mutex
//! is needed.

use std::sync::Arc;

use filelock_core::{RestApiLinks, WildcardPermissionChecker};
use filelock_storage::{ConfigStore, InMemoryConfigStore, SqliteConfigStore};

use crate::directory::StaticDirectory;
use crate::error::ApiError;
use crate::lock_command::MemoryLockCommand;
use crate::service::{Collaborators, FileLockService};
use crate::settings::Settings;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<FileLockService>,
    /// Repositories and users; also the source of caller grants.
    pub directory: Arc<StaticDirectory>,
}

impl AppState {
    /// Creates the state for the server binary: SQLite-backed configs and a
    /// directory loaded from the configured seed file, if any.
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let sqlite = SqliteConfigStore::new(&settings.db_path)?;
        tracing::info!(db_path = sqlite.db_path(), "repository configs stored in SQLite");
        let configs: Arc<dyn ConfigStore> = Arc::new(sqlite);
        let directory = match &settings.directory_path {
            Some(path) => StaticDirectory::load(path)?,
            None => {
                tracing::warn!("FILELOCK_DIRECTORY not set, starting with an empty directory");
                StaticDirectory::new()
            }
        };
        let command = MemoryLockCommand::new(settings.lock_types.iter().cloned());

        Self::build(&settings.base_url, directory, command, configs)
    }

    /// Creates a state with in-memory configs and default lock types (for testing).
    pub fn in_memory(base_url: &str, directory: StaticDirectory) -> Result<Self, ApiError> {
        Self::build(
            base_url,
            directory,
            MemoryLockCommand::with_default_types(),
            Arc::new(InMemoryConfigStore::new()),
        )
    }

    fn build(
        base_url: &str,
        directory: StaticDirectory,
        command: MemoryLockCommand,
        configs: Arc<dyn ConfigStore>,
    ) -> Result<Self, ApiError> {
        let links = RestApiLinks::new(base_url)?;
        let directory = Arc::new(directory);

        let service = FileLockService::new(
            Collaborators {
                repositories: directory.clone(),
                users: directory.clone(),
                command: Arc::new(command),
                permissions: Arc::new(WildcardPermissionChecker),
                configs,
            },
            links,
        );

        Ok(AppState {
            service: Arc::new(service),
            directory,
        })
    }
}
