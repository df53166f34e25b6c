//! Per-repository lock link aggregation.
//!
//! Two independent decisions, both only for repositories whose type
//! supports the lock command: `fileLocks` needs push and an enabled config,
//! `fileLockConfig` needs the configure grant alone.

use crate::config::RepositoryConfig;
use crate::links::{Link, Links, RestApiLinks};
use crate::permission::{Caller, PermissionPolicy};
use crate::repository::Repository;

/// Repository-level lock links visible to one caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryLockLinks {
    pub file_locks: Option<Link>,
    pub file_lock_config: Option<Link>,
}

impl RepositoryLockLinks {
    pub fn append_links(&self, links: &mut Links) {
        if let Some(link) = &self.file_locks {
            links.insert("fileLocks", link.clone());
        }
        if let Some(link) = &self.file_lock_config {
            links.insert("fileLockConfig", link.clone());
        }
    }
}

#[derive(Debug, Clone)]
pub struct RepositoryEnricher {
    policy: PermissionPolicy,
    links: RestApiLinks,
}

impl RepositoryEnricher {
    pub fn new(policy: PermissionPolicy, links: RestApiLinks) -> Self {
        RepositoryEnricher { policy, links }
    }

    pub fn enrich(
        &self,
        repository: &Repository,
        caller: &Caller,
        config: &RepositoryConfig,
        supported: bool,
    ) -> RepositoryLockLinks {
        if !supported {
            return RepositoryLockLinks::default();
        }

        let file_locks = (self.policy.may_lock(caller, repository) && config.enabled)
            .then(|| self.links.file_locks(repository));
        let file_lock_config = self
            .policy
            .may_configure(caller, repository)
            .then(|| self.links.config(repository));

        RepositoryLockLinks {
            file_locks,
            file_lock_config,
        }
    }
}
