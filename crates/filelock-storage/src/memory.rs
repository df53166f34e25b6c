//! In-memory [`ConfigStore`] backed by `DashMap`.

use dashmap::DashMap;

use filelock_core::{RepositoryConfig, RepositoryId};

use crate::error::StorageError;
use crate::traits::ConfigStore;

/// Volatile config store for tests and ephemeral servers.
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    configs: DashMap<RepositoryId, RepositoryConfig>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load(&self, repository: &RepositoryId) -> Result<Option<RepositoryConfig>, StorageError> {
        Ok(self.configs.get(repository).map(|entry| *entry.value()))
    }

    fn store(
        &self,
        repository: &RepositoryId,
        config: &RepositoryConfig,
    ) -> Result<(), StorageError> {
        self.configs.insert(repository.clone(), *config);
        Ok(())
    }
}
