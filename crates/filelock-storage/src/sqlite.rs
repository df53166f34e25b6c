//! SQLite implementation of [`ConfigStore`].
//!
//! One row per repository holding the config as JSON TEXT. Each call opens
//! its own connection so the store can be shared across handler tasks.

use rusqlite::{params, Connection, OptionalExtension};

use filelock_core::{RepositoryConfig, RepositoryId};

use crate::error::StorageError;
use crate::traits::ConfigStore;

/// SQLite-backed config store.
#[derive(Debug, Clone)]
pub struct SqliteConfigStore {
    db_path: String,
}

impl SqliteConfigStore {
    /// Opens (or creates) the database at `db_path` and applies migrations.
    pub fn new(db_path: &str) -> Result<Self, StorageError> {
        let store = Self {
            db_path: db_path.to_string(),
        };
        let _conn = store.open_conn()?;
        Ok(store)
    }

    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    fn open_conn(&self) -> Result<Connection, StorageError> {
        crate::schema::open_database(&self.db_path)
    }
}

impl ConfigStore for SqliteConfigStore {
    fn load(&self, repository: &RepositoryId) -> Result<Option<RepositoryConfig>, StorageError> {
        let conn = self.open_conn()?;
        let json: Option<String> = conn
            .query_row(
                "SELECT config_json FROM repository_configs WHERE repository_id = ?1",
                params![repository.0],
                |row| row.get(0),
            )
            .optional()?;

        json.map(|raw| serde_json::from_str(&raw).map_err(StorageError::from))
            .transpose()
    }

    fn store(
        &self,
        repository: &RepositoryId,
        config: &RepositoryConfig,
    ) -> Result<(), StorageError> {
        let conn = self.open_conn()?;
        let json = serde_json::to_string(config)?;

        conn.execute(
            "INSERT INTO repository_configs (repository_id, config_json, updated_at)
             VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
             ON CONFLICT(repository_id) DO UPDATE SET
                 config_json = excluded.config_json,
                 updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
            params![repository.0, json],
        )?;

        Ok(())
    }
}
