//! Per-file lock link resolution.
//!
//! [`FileEnricher`] decides what a file representation may say about locks.
//! Nothing is exposed unless all three hold: the repository supports the
//! lock command, the caller may push, and locking is enabled in the
//! repository config. Otherwise the current lock status decides between a
//! `lock` link and an `unlock` link plus the embedded [`LockView`].

use crate::config::RepositoryConfig;
use crate::links::{Link, Links, RestApiLinks};
use crate::lock::CommandError;
use crate::permission::{Caller, PermissionPolicy};
use crate::repository::Repository;
use crate::traits::LockCommand;
use crate::view::{LockView, LockViewMapper};

/// Outcome of resolving lock links for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileEnrichment {
    /// Locking is unavailable or invisible to the caller.
    Hidden,
    /// The file is not locked and may be.
    Unlocked { lock: Link },
    /// The file is locked.
    Locked { unlock: Link, lock: LockView },
}

impl FileEnrichment {
    pub fn is_hidden(&self) -> bool {
        matches!(self, FileEnrichment::Hidden)
    }

    /// Appends the `lock` or `unlock` link, if any.
    pub fn append_links(&self, links: &mut Links) {
        match self {
            FileEnrichment::Hidden => {}
            FileEnrichment::Unlocked { lock } => links.insert("lock", lock.clone()),
            FileEnrichment::Locked { unlock, .. } => links.insert("unlock", unlock.clone()),
        }
    }

    /// The lock to embed as `fileLock`, if the file is locked.
    pub fn lock_view(&self) -> Option<&LockView> {
        match self {
            FileEnrichment::Locked { lock, .. } => Some(lock),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileEnricher {
    policy: PermissionPolicy,
    links: RestApiLinks,
    mapper: LockViewMapper,
}

impl FileEnricher {
    pub fn new(policy: PermissionPolicy, links: RestApiLinks, mapper: LockViewMapper) -> Self {
        FileEnricher {
            policy,
            links,
            mapper,
        }
    }

    /// Resolves lock links for `path`. The lock command is only queried when
    /// locking is visible to the caller; its failures are passed through.
    pub fn enrich(
        &self,
        repository: &Repository,
        path: &str,
        caller: &Caller,
        config: &RepositoryConfig,
        command: &dyn LockCommand,
    ) -> Result<FileEnrichment, CommandError> {
        if !command.is_supported(repository)
            || !self.policy.may_lock(caller, repository)
            || !config.enabled
        {
            return Ok(FileEnrichment::Hidden);
        }

        match command.status(repository, path)? {
            Some(lock) => Ok(FileEnrichment::Locked {
                unlock: self.links.unlock_file(repository, path),
                lock: self.mapper.map(repository, &lock, caller),
            }),
            None => Ok(FileEnrichment::Unlocked {
                lock: self.links.lock_file(repository, path),
            }),
        }
    }
}
