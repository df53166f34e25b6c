//! Defaulting reads and permission-checked writes of repository configs.

use std::sync::Arc;

use filelock_core::{Caller, PermissionPolicy, Repository, RepositoryConfig};

use crate::error::StorageError;
use crate::traits::ConfigStore;

/// The config facade used by handlers and enrichers.
///
/// Reads never fail with not-found: a repository without a stored config
/// gets [`RepositoryConfig::default`]. Writes require the configure grant
/// and leave the store untouched when it is missing.
#[derive(Clone)]
pub struct RepositoryConfigStore {
    backend: Arc<dyn ConfigStore>,
    policy: PermissionPolicy,
}

impl RepositoryConfigStore {
    pub fn new(backend: Arc<dyn ConfigStore>, policy: PermissionPolicy) -> Self {
        RepositoryConfigStore { backend, policy }
    }

    pub fn get_config(&self, repository: &Repository) -> Result<RepositoryConfig, StorageError> {
        Ok(self.backend.load(&repository.id)?.unwrap_or_default())
    }

    pub fn update_config(
        &self,
        caller: &Caller,
        repository: &Repository,
        config: RepositoryConfig,
    ) -> Result<(), StorageError> {
        self.policy.check_configure(caller, repository)?;
        self.backend.store(&repository.id, &config)?;
        tracing::info!(
            repository = %repository.namespace_and_name(),
            user = caller.principal(),
            enabled = config.enabled,
            "file lock config updated"
        );
        Ok(())
    }
}

impl std::fmt::Debug for RepositoryConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryConfigStore").finish_non_exhaustive()
    }
}
