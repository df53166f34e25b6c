//! Grants, callers and the file lock permission policy.
//!
//! Grants are wildcard permission strings of the form
//! `domain:actions:instances`, e.g. `repository:push:id-1`. Each part may
//! list several comma separated values or `*`. A grant with fewer parts
//! than the required permission implies every missing part.
//!
//! [`PermissionPolicy`] exposes two flavours of every decision: `may_*`
//! answers a question and is used to decide link visibility, `check_*`
//! returns [`CoreError::Unauthorized`] and guards mutations.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::repository::Repository;
use crate::traits::PermissionChecker;

/// Repository action required to view, acquire and release file locks.
pub const PUSH: &str = "push";

/// Custom repository action required to read and change the lock configuration.
pub const CONFIGURE_FILE_LOCK: &str = "configureFileLock";

const REPOSITORY_DOMAIN: &str = "repository";
const WILDCARD: &str = "*";

/// A parsed wildcard permission.
///
/// Matching is case-insensitive; every token is lowercased at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permission {
    raw: String,
    parts: Vec<BTreeSet<String>>,
}

impl Permission {
    /// Parses a permission string such as `repository:push,pull:id-1`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidPermission(raw.to_string()));
        }

        let mut parts = Vec::new();
        for part in trimmed.split(':') {
            let tokens: BTreeSet<String> = part
                .split(',')
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect();
            if tokens.is_empty() {
                return Err(CoreError::InvalidPermission(raw.to_string()));
            }
            parts.push(tokens);
        }

        Ok(Permission {
            raw: trimmed.to_string(),
            parts,
        })
    }

    /// The permission needed to perform `action` on `repository`.
    pub fn for_repository(action: &str, repository: &Repository) -> Self {
        let parts = [REPOSITORY_DOMAIN, action, repository.id.0.as_str()]
            .iter()
            .map(|p| BTreeSet::from([p.to_lowercase()]))
            .collect();
        Permission {
            raw: format!("{}:{}:{}", REPOSITORY_DOMAIN, action, repository.id),
            parts,
        }
    }

    /// Returns `true` if holding `self` grants `other`.
    pub fn implies(&self, other: &Permission) -> bool {
        for (i, other_part) in other.parts.iter().enumerate() {
            let Some(part) = self.parts.get(i) else {
                return true;
            };
            if !part.contains(WILDCARD) && !part.is_superset(other_part) {
                return false;
            }
        }

        self.parts
            .iter()
            .skip(other.parts.len())
            .all(|part| part.contains(WILDCARD))
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl TryFrom<String> for Permission {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Permission::parse(&value)
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.raw
    }
}

/// The authenticated subject of a request together with its grants.
///
/// Passed explicitly into every decision; nothing reads the caller from
/// ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    principal: String,
    grants: Vec<Permission>,
}

impl Caller {
    pub fn new(principal: impl Into<String>, grants: Vec<Permission>) -> Self {
        Caller {
            principal: principal.into(),
            grants,
        }
    }

    /// The user id of the caller.
    pub fn principal(&self) -> &str {
        &self.principal
    }

    pub fn grants(&self) -> &[Permission] {
        &self.grants
    }
}

/// [`PermissionChecker`] that evaluates the caller's wildcard grants.
#[derive(Debug, Clone, Copy, Default)]
pub struct WildcardPermissionChecker;

impl PermissionChecker for WildcardPermissionChecker {
    fn is_permitted(&self, caller: &Caller, action: &str, repository: &Repository) -> bool {
        let required = Permission::for_repository(action, repository);
        caller.grants().iter().any(|grant| grant.implies(&required))
    }
}

/// File lock permission decisions on top of a [`PermissionChecker`].
#[derive(Clone)]
pub struct PermissionPolicy {
    checker: Arc<dyn PermissionChecker>,
}

impl PermissionPolicy {
    pub fn new(checker: Arc<dyn PermissionChecker>) -> Self {
        PermissionPolicy { checker }
    }

    /// Whether the caller may see lock status and acquire or release locks.
    pub fn may_lock(&self, caller: &Caller, repository: &Repository) -> bool {
        self.checker.is_permitted(caller, PUSH, repository)
    }

    pub fn check_lock(&self, caller: &Caller, repository: &Repository) -> Result<(), CoreError> {
        self.checker.check(caller, PUSH, repository)
    }

    /// Whether the caller may read and change the repository lock configuration.
    pub fn may_configure(&self, caller: &Caller, repository: &Repository) -> bool {
        self.checker
            .is_permitted(caller, CONFIGURE_FILE_LOCK, repository)
    }

    pub fn check_configure(
        &self,
        caller: &Caller,
        repository: &Repository,
    ) -> Result<(), CoreError> {
        self.checker.check(caller, CONFIGURE_FILE_LOCK, repository)
    }
}

impl Default for PermissionPolicy {
    fn default() -> Self {
        Self::new(Arc::new(WildcardPermissionChecker))
    }
}

impl fmt::Debug for PermissionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermissionPolicy").finish_non_exhaustive()
    }
}
