//! Collaborator interfaces consumed by the decision layer.
//!
//! The host platform owns lock state, repository existence, user display
//! data and the permission model. This crate reaches all of them only
//! through these traits, passed in explicitly at construction time.

use crate::error::CoreError;
use crate::lock::{CommandError, LockInfo};
use crate::permission::Caller;
use crate::repository::{NamespaceAndName, Repository};

/// The host's per-repository file lock command.
///
/// Arbitration between concurrent `lock` calls is entirely up to the
/// implementation.
pub trait LockCommand: Send + Sync {
    /// Whether the repository's backing type supports file locks at all.
    fn is_supported(&self, repository: &Repository) -> bool;

    /// Returns the lock currently held on `path`, if any.
    fn status(&self, repository: &Repository, path: &str)
        -> Result<Option<LockInfo>, CommandError>;

    /// Returns every lock currently held in the repository.
    fn get_all(&self, repository: &Repository) -> Result<Vec<LockInfo>, CommandError>;

    /// Locks `path` on behalf of `owner`.
    fn lock(&self, repository: &Repository, path: &str, owner: &str)
        -> Result<LockInfo, CommandError>;

    /// Releases the lock on `path`.
    ///
    /// With `force` the lock is removed regardless of its owner. Returns the
    /// released lock, or `None` if the path was not locked.
    fn unlock(
        &self,
        repository: &Repository,
        path: &str,
        principal: &str,
        force: bool,
    ) -> Result<Option<LockInfo>, CommandError>;
}

/// Evaluates a caller's grants against a repository action.
pub trait PermissionChecker: Send + Sync {
    fn is_permitted(&self, caller: &Caller, action: &str, repository: &Repository) -> bool;

    /// Like [`is_permitted`](Self::is_permitted) but fails with
    /// [`CoreError::Unauthorized`].
    fn check(&self, caller: &Caller, action: &str, repository: &Repository) -> Result<(), CoreError> {
        if self.is_permitted(caller, action, repository) {
            Ok(())
        } else {
            Err(CoreError::Unauthorized {
                principal: caller.principal().to_string(),
                action: action.to_string(),
                repository: repository.namespace_and_name().to_string(),
            })
        }
    }
}

/// Maps user ids to human-readable display names.
pub trait UserDisplayResolver: Send + Sync {
    fn display_name(&self, user_id: &str) -> Option<String>;

    /// The display name of `user_id`, falling back to the id itself.
    fn resolve(&self, user_id: &str) -> String {
        self.display_name(user_id)
            .unwrap_or_else(|| user_id.to_string())
    }
}

/// Looks up repositories by their public address.
pub trait RepositoryLookup: Send + Sync {
    fn by_namespace_and_name(&self, namespace_and_name: &NamespaceAndName) -> Option<Repository>;

    /// Like [`by_namespace_and_name`](Self::by_namespace_and_name) but unknown
    /// repositories are a [`CoreError::RepositoryNotFound`].
    fn require(&self, namespace_and_name: &NamespaceAndName) -> Result<Repository, CoreError> {
        self.by_namespace_and_name(namespace_and_name)
            .ok_or_else(|| CoreError::RepositoryNotFound(namespace_and_name.clone()))
    }
}
