//! The [`ConfigStore`] trait defining raw config persistence.
//!
//! Backends store one record per repository and replace it wholesale on
//! every write. Defaulting and permission checks live in
//! [`RepositoryConfigStore`](crate::RepositoryConfigStore), not here.

use filelock_core::{RepositoryConfig, RepositoryId};

use crate::error::StorageError;

pub trait ConfigStore: Send + Sync {
    /// Returns the stored config, or `None` if nothing was ever stored.
    fn load(&self, repository: &RepositoryId) -> Result<Option<RepositoryConfig>, StorageError>;

    /// Replaces the stored config. Last writer wins.
    fn store(&self, repository: &RepositoryId, config: &RepositoryConfig)
        -> Result<(), StorageError>;
}
