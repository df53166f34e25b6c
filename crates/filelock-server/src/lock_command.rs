//! In-memory file lock command.
//!
//! [`MemoryLockCommand`] keeps one exclusive lock per (repository, path) in
//! a `DashMap`. The first `lock` wins; a second user gets
//! [`CommandError::AlreadyLocked`] until the lock is released. Support is
//! decided by repository type.

use std::collections::HashSet;

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use filelock_core::{CommandError, LockCommand, LockInfo, Repository, RepositoryId};

/// Default repository types with lock support.
pub const DEFAULT_LOCK_TYPES: &[&str] = &["git"];

type LockKey = (RepositoryId, String);

pub struct MemoryLockCommand {
    locks: DashMap<LockKey, LockInfo>,
    supported_types: HashSet<String>,
}

impl MemoryLockCommand {
    /// Creates a lock command supporting the given repository types.
    pub fn new<I, S>(supported_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MemoryLockCommand {
            locks: DashMap::new(),
            supported_types: supported_types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_default_types() -> Self {
        Self::new(DEFAULT_LOCK_TYPES.iter().copied())
    }

    fn ensure_supported(&self, repository: &Repository) -> Result<(), CommandError> {
        if self.is_supported(repository) {
            Ok(())
        } else {
            Err(CommandError::Unsupported {
                repository: repository.namespace_and_name().to_string(),
            })
        }
    }

    fn key(repository: &Repository, path: &str) -> LockKey {
        (repository.id.clone(), path.to_string())
    }
}

impl LockCommand for MemoryLockCommand {
    fn is_supported(&self, repository: &Repository) -> bool {
        self.supported_types.contains(&repository.kind)
    }

    fn status(
        &self,
        repository: &Repository,
        path: &str,
    ) -> Result<Option<LockInfo>, CommandError> {
        self.ensure_supported(repository)?;
        Ok(self
            .locks
            .get(&Self::key(repository, path))
            .map(|entry| entry.value().clone()))
    }

    fn get_all(&self, repository: &Repository) -> Result<Vec<LockInfo>, CommandError> {
        self.ensure_supported(repository)?;
        let mut locks: Vec<LockInfo> = self
            .locks
            .iter()
            .filter(|entry| entry.key().0 == repository.id)
            .map(|entry| entry.value().clone())
            .collect();
        locks.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(locks)
    }

    fn lock(
        &self,
        repository: &Repository,
        path: &str,
        owner: &str,
    ) -> Result<LockInfo, CommandError> {
        self.ensure_supported(repository)?;
        let now = Utc::now();

        match self.locks.entry(Self::key(repository, path)) {
            Entry::Occupied(mut entry) => {
                let held = entry.get_mut();
                if held.user_id != owner {
                    return Err(CommandError::AlreadyLocked {
                        path: path.to_string(),
                        owner: held.user_id.clone(),
                    });
                }
                // Same owner: refresh the timestamp
                held.timestamp = now;
                Ok(held.clone())
            }
            Entry::Vacant(entry) => {
                let lock = LockInfo::new(path, owner, now);
                entry.insert(lock.clone());
                Ok(lock)
            }
        }
    }

    fn unlock(
        &self,
        repository: &Repository,
        path: &str,
        principal: &str,
        force: bool,
    ) -> Result<Option<LockInfo>, CommandError> {
        self.ensure_supported(repository)?;
        let key = Self::key(repository, path);

        if let Some((_, released)) = self
            .locks
            .remove_if(&key, |_, held| force || held.user_id == principal)
        {
            return Ok(Some(released));
        }

        match self.locks.get(&key) {
            Some(held) => Err(CommandError::NotOwner {
                path: path.to_string(),
                owner: held.user_id.clone(),
            }),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git_repo() -> Repository {
        Repository::new("id-1", "git", "hitchhiker", "HeartOfGold")
    }

    fn svn_repo() -> Repository {
        Repository::new("id-2", "svn", "hitchhiker", "Puzzle")
    }

    #[test]
    fn supports_configured_types_only() {
        let command = MemoryLockCommand::with_default_types();
        assert!(command.is_supported(&git_repo()));
        assert!(!command.is_supported(&svn_repo()));
        assert!(matches!(
            command.status(&svn_repo(), "a"),
            Err(CommandError::Unsupported { .. })
        ));
    }

    #[test]
    fn lock_then_status() {
        let command = MemoryLockCommand::with_default_types();
        assert!(command.status(&git_repo(), "src/a.rs").unwrap().is_none());

        command.lock(&git_repo(), "src/a.rs", "trillian").unwrap();
        let lock = command.status(&git_repo(), "src/a.rs").unwrap().unwrap();
        assert_eq!(lock.user_id, "trillian");
        assert_eq!(lock.path, "src/a.rs");
    }

    #[test]
    fn second_owner_is_rejected() {
        let command = MemoryLockCommand::with_default_types();
        command.lock(&git_repo(), "a", "trillian").unwrap();

        let err = command.lock(&git_repo(), "a", "zaphod").unwrap_err();
        assert_eq!(
            err,
            CommandError::AlreadyLocked {
                path: "a".to_string(),
                owner: "trillian".to_string()
            }
        );
    }

    #[test]
    fn relock_by_owner_refreshes() {
        let command = MemoryLockCommand::with_default_types();
        let first = command.lock(&git_repo(), "a", "trillian").unwrap();
        let second = command.lock(&git_repo(), "a", "trillian").unwrap();
        assert!(second.timestamp >= first.timestamp);
        assert_eq!(command.get_all(&git_repo()).unwrap().len(), 1);
    }

    #[test]
    fn forced_unlock_ignores_owner() {
        let command = MemoryLockCommand::with_default_types();
        command.lock(&git_repo(), "a", "trillian").unwrap();

        let released = command.unlock(&git_repo(), "a", "zaphod", true).unwrap();
        assert_eq!(released.unwrap().user_id, "trillian");
        assert!(command.status(&git_repo(), "a").unwrap().is_none());
    }

    #[test]
    fn unforced_unlock_requires_owner() {
        let command = MemoryLockCommand::with_default_types();
        command.lock(&git_repo(), "a", "trillian").unwrap();

        assert!(matches!(
            command.unlock(&git_repo(), "a", "zaphod", false),
            Err(CommandError::NotOwner { .. })
        ));
        assert!(command
            .unlock(&git_repo(), "a", "trillian", false)
            .unwrap()
            .is_some());
    }

    #[test]
    fn unlocking_unlocked_path_is_noop() {
        let command = MemoryLockCommand::with_default_types();
        assert!(command.unlock(&git_repo(), "a", "trillian", true).unwrap().is_none());
    }

    #[test]
    fn get_all_is_scoped_and_ordered() {
        let command = MemoryLockCommand::new(["git", "hg"]);
        let other = Repository::new("id-3", "hg", "hitchhiker", "Restaurant");
        command.lock(&git_repo(), "b", "trillian").unwrap();
        command.lock(&git_repo(), "a", "zaphod").unwrap();
        command.lock(&other, "c", "trillian").unwrap();

        let paths: Vec<String> = command
            .get_all(&git_repo())
            .unwrap()
            .into_iter()
            .map(|l| l.path)
            .collect();
        assert_eq!(paths, vec!["a", "b"]);
    }
}
