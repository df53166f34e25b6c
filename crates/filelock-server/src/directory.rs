//! Static directory of repositories and users.
//!
//! Stands in for the host's repository manager and user database. It can be
//! seeded from a JSON file:
//!
//! ```json
//! {
//!   "repositories": [
//!     { "id": "id-1", "type": "git", "namespace": "hitchhiker", "name": "HeartOfGold" }
//!   ],
//!   "users": [
//!     { "id": "trillian", "displayName": "Tricia McMillan",
//!       "permissions": ["repository:push,configureFileLock:id-1"] }
//!   ]
//! }
//! ```

use std::path::Path;

use dashmap::DashMap;
use serde::Deserialize;

use filelock_core::{
    ensure_addressable, Caller, CoreError, NamespaceAndName, Permission, Repository,
    RepositoryLookup, UserDisplayResolver,
};

use crate::error::ApiError;

/// On-disk seed format.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectorySeed {
    #[serde(default)]
    pub repositories: Vec<Repository>,
    #[serde(default)]
    pub users: Vec<UserSeed>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSeed {
    pub id: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Clone)]
struct UserEntry {
    display_name: Option<String>,
    permissions: Vec<Permission>,
}

/// Concurrent in-memory registry of repositories and users.
#[derive(Debug, Default)]
pub struct StaticDirectory {
    repositories: DashMap<NamespaceAndName, Repository>,
    users: DashMap<String, UserEntry>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: DirectorySeed) -> Result<Self, CoreError> {
        let directory = Self::new();
        for repository in seed.repositories {
            directory.add_repository(repository)?;
        }
        for user in seed.users {
            directory.add_user(user.id, user.display_name, user.permissions);
        }
        Ok(directory)
    }

    /// Reads a JSON seed file.
    pub fn load(path: &Path) -> Result<Self, ApiError> {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            ApiError::InternalError(format!(
                "failed to read directory file {}: {}",
                path.display(),
                err
            ))
        })?;
        let seed: DirectorySeed = serde_json::from_str(&raw).map_err(|err| {
            ApiError::InternalError(format!(
                "invalid directory file {}: {}",
                path.display(),
                err
            ))
        })?;
        tracing::info!(
            repositories = seed.repositories.len(),
            users = seed.users.len(),
            "loaded directory from {}",
            path.display()
        );
        Ok(Self::from_seed(seed)?)
    }

    /// Registers a repository. Its namespace and name must each be usable as
    /// one link path segment.
    pub fn add_repository(&self, repository: Repository) -> Result<(), CoreError> {
        ensure_addressable(&repository.namespace)?;
        ensure_addressable(&repository.name)?;
        self.repositories
            .insert(repository.namespace_and_name(), repository);
        Ok(())
    }

    pub fn add_user(
        &self,
        id: impl Into<String>,
        display_name: Option<String>,
        permissions: Vec<Permission>,
    ) {
        self.users.insert(
            id.into(),
            UserEntry {
                display_name,
                permissions,
            },
        );
    }

    /// The caller for a known user, carrying that user's grants.
    pub fn caller(&self, user_id: &str) -> Option<Caller> {
        self.users
            .get(user_id)
            .map(|entry| Caller::new(user_id, entry.permissions.clone()))
    }
}

impl RepositoryLookup for StaticDirectory {
    fn by_namespace_and_name(&self, namespace_and_name: &NamespaceAndName) -> Option<Repository> {
        self.repositories
            .get(namespace_and_name)
            .map(|entry| entry.value().clone())
    }
}

impl UserDisplayResolver for StaticDirectory {
    fn display_name(&self, user_id: &str) -> Option<String> {
        self.users
            .get(user_id)
            .and_then(|entry| entry.display_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SEED: &str = r#"{
        "repositories": [
            { "id": "id-1", "type": "git", "namespace": "hitchhiker", "name": "HeartOfGold" }
        ],
        "users": [
            { "id": "trillian", "displayName": "Tricia McMillan",
              "permissions": ["repository:push:id-1"] },
            { "id": "dent" }
        ]
    }"#;

    #[test]
    fn seed_populates_repositories_and_users() {
        let seed: DirectorySeed = serde_json::from_str(SEED).unwrap();
        let directory = StaticDirectory::from_seed(seed).unwrap();

        let repo = directory
            .by_namespace_and_name(&NamespaceAndName::new("hitchhiker", "HeartOfGold"))
            .unwrap();
        assert_eq!(repo.kind, "git");

        assert_eq!(directory.resolve("trillian"), "Tricia McMillan");
        assert_eq!(directory.resolve("dent"), "dent");
        assert_eq!(directory.caller("trillian").unwrap().grants().len(), 1);
        assert!(directory.caller("dent").unwrap().grants().is_empty());
        assert!(directory.caller("marvin").is_none());
    }

    #[test]
    fn require_unknown_repository_is_not_found() {
        let directory = StaticDirectory::new();
        assert!(directory
            .require(&NamespaceAndName::new("hitchhiker", "nope"))
            .is_err());
    }

    #[test]
    fn load_reads_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEED.as_bytes()).unwrap();

        let directory = StaticDirectory::load(file.path()).unwrap();
        assert!(directory.caller("trillian").is_some());
    }

    #[test]
    fn dot_namespace_or_name_is_rejected() {
        let directory = StaticDirectory::new();
        assert!(matches!(
            directory.add_repository(Repository::new("id-9", "git", "..", "HeartOfGold")),
            Err(CoreError::UnaddressableSegment(_))
        ));
        assert!(directory
            .add_repository(Repository::new("id-9", "git", "hitchhiker", "."))
            .is_err());
        assert!(directory
            .require(&NamespaceAndName::new("..", "HeartOfGold"))
            .is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"repositories":[{"id":"id-9","type":"git","namespace":"..","name":"x"}]}"#,
        )
        .unwrap();
        assert!(StaticDirectory::load(file.path()).is_err());
    }

    #[test]
    fn load_rejects_invalid_permission() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"users":[{"id":"x","permissions":["a::b"]}]}"#)
            .unwrap();
        assert!(StaticDirectory::load(file.path()).is_err());
    }
}
