//! FileLockService: the coordinator between HTTP handlers and the lock
//! command, the config store and the decision layer.
//!
//! Read paths (the repository and file views) degrade by omitting links.
//! Every mutation and the lock listing check their grant first and fail
//! closed.

use std::sync::Arc;

use filelock_core::{
    ensure_addressable, Caller, FileEnricher, FileEnrichment, Links, LockCommand, LockViewMapper,
    NamespaceAndName, PermissionChecker, PermissionPolicy, Repository, RepositoryConfig,
    RepositoryEnricher, RepositoryLockLinks, RepositoryLookup, RestApiLinks, UserDisplayResolver,
};
use filelock_storage::{ConfigStore, RepositoryConfigStore};

use crate::error::ApiError;
use crate::schema::config::RepositoryConfigResponse;
use crate::schema::locks::{FileLocksEmbedded, FileLocksResponse};
use crate::schema::repositories::{FileEmbedded, FileResponse, RepositoryResponse};

/// Collaborators the service is built from.
pub struct Collaborators {
    pub repositories: Arc<dyn RepositoryLookup>,
    pub users: Arc<dyn UserDisplayResolver>,
    pub command: Arc<dyn LockCommand>,
    pub permissions: Arc<dyn PermissionChecker>,
    pub configs: Arc<dyn ConfigStore>,
}

pub struct FileLockService {
    repositories: Arc<dyn RepositoryLookup>,
    command: Arc<dyn LockCommand>,
    policy: PermissionPolicy,
    configs: RepositoryConfigStore,
    links: RestApiLinks,
    mapper: LockViewMapper,
    file_enricher: FileEnricher,
    repository_enricher: RepositoryEnricher,
}

impl FileLockService {
    pub fn new(collaborators: Collaborators, links: RestApiLinks) -> Self {
        let policy = PermissionPolicy::new(collaborators.permissions);
        let mapper = LockViewMapper::new(links.clone(), collaborators.users);

        FileLockService {
            repositories: collaborators.repositories,
            command: collaborators.command,
            configs: RepositoryConfigStore::new(collaborators.configs, policy.clone()),
            file_enricher: FileEnricher::new(policy.clone(), links.clone(), mapper.clone()),
            repository_enricher: RepositoryEnricher::new(policy.clone(), links.clone()),
            policy,
            links,
            mapper,
        }
    }

    fn repository(&self, namespace_and_name: &NamespaceAndName) -> Result<Repository, ApiError> {
        Ok(self.repositories.require(namespace_and_name)?)
    }

    fn check_lock(&self, caller: &Caller, repository: &Repository) -> Result<(), ApiError> {
        self.policy.check_lock(caller, repository).map_err(|err| {
            tracing::debug!(user = caller.principal(), repository = %repository.namespace_and_name(), "push required for file locks");
            err.into()
        })
    }

    /// All locks of a repository. Requires push.
    pub fn list_locks(
        &self,
        caller: &Caller,
        namespace_and_name: &NamespaceAndName,
    ) -> Result<FileLocksResponse, ApiError> {
        let repository = self.repository(namespace_and_name)?;
        self.check_lock(caller, &repository)?;

        let file_locks = self
            .command
            .get_all(&repository)?
            .iter()
            .map(|lock| self.mapper.map(&repository, lock, caller))
            .collect();

        Ok(FileLocksResponse {
            links: Links::new().with("self", self.links.file_locks(&repository)),
            embedded: FileLocksEmbedded { file_locks },
        })
    }

    /// Locks `path` for the caller. Requires push.
    pub fn lock_file(
        &self,
        caller: &Caller,
        namespace_and_name: &NamespaceAndName,
        path: &str,
    ) -> Result<(), ApiError> {
        let repository = self.repository(namespace_and_name)?;
        self.check_lock(caller, &repository)?;
        ensure_addressable(path)?;

        self.command.lock(&repository, path, caller.principal())?;
        tracing::info!(
            repository = %namespace_and_name,
            path,
            user = caller.principal(),
            "file locked"
        );
        Ok(())
    }

    /// Releases the lock on `path` regardless of its owner. Requires push.
    pub fn unlock_file(
        &self,
        caller: &Caller,
        namespace_and_name: &NamespaceAndName,
        path: &str,
    ) -> Result<(), ApiError> {
        let repository = self.repository(namespace_and_name)?;
        self.check_lock(caller, &repository)?;
        ensure_addressable(path)?;

        let released = self
            .command
            .unlock(&repository, path, caller.principal(), true)?;
        match released {
            Some(lock) => tracing::info!(
                repository = %namespace_and_name,
                path,
                user = caller.principal(),
                owner = %lock.user_id,
                force = true,
                "file unlocked"
            ),
            None => tracing::debug!(repository = %namespace_and_name, path, "file was not locked"),
        }
        Ok(())
    }

    /// The repository config. Requires the configure grant.
    pub fn get_config(
        &self,
        caller: &Caller,
        namespace_and_name: &NamespaceAndName,
    ) -> Result<RepositoryConfigResponse, ApiError> {
        let repository = self.repository(namespace_and_name)?;
        self.policy.check_configure(caller, &repository)?;

        let config = self.configs.get_config(&repository)?;
        let mut links = Links::new().with("self", self.links.config(&repository));
        if self.policy.may_configure(caller, &repository) {
            links.insert("update", self.links.config(&repository));
        }

        Ok(RepositoryConfigResponse {
            enabled: config.enabled,
            links,
        })
    }

    /// Replaces the repository config. Requires the configure grant.
    pub fn update_config(
        &self,
        caller: &Caller,
        namespace_and_name: &NamespaceAndName,
        config: RepositoryConfig,
    ) -> Result<(), ApiError> {
        let repository = self.repository(namespace_and_name)?;
        self.configs.update_config(caller, &repository, config)?;
        Ok(())
    }

    /// The repository view with the lock links visible to the caller.
    pub fn repository_view(
        &self,
        caller: &Caller,
        namespace_and_name: &NamespaceAndName,
    ) -> Result<RepositoryResponse, ApiError> {
        let repository = self.repository(namespace_and_name)?;

        let lock_links = if self.command.is_supported(&repository) {
            let config = self.configs.get_config(&repository)?;
            self.repository_enricher.enrich(&repository, caller, &config, true)
        } else {
            RepositoryLockLinks::default()
        };

        let mut links = Links::new().with("self", self.links.repository(&repository));
        lock_links.append_links(&mut links);

        Ok(RepositoryResponse {
            namespace: repository.namespace,
            name: repository.name,
            kind: repository.kind,
            links,
        })
    }

    /// The file view with the `lock` or `unlock` link and the embedded lock.
    pub fn file_view(
        &self,
        caller: &Caller,
        namespace_and_name: &NamespaceAndName,
        path: &str,
    ) -> Result<FileResponse, ApiError> {
        let repository = self.repository(namespace_and_name)?;
        ensure_addressable(path)?;

        // Unsupported repositories never need their config.
        let enrichment = if self.command.is_supported(&repository) {
            let config = self.configs.get_config(&repository)?;
            self.file_enricher
                .enrich(&repository, path, caller, &config, self.command.as_ref())?
        } else {
            FileEnrichment::Hidden
        };

        let mut links = Links::new().with("self", self.links.file(&repository, path));
        enrichment.append_links(&mut links);
        let embedded = enrichment.lock_view().map(|lock| FileEmbedded {
            file_lock: lock.clone(),
        });

        Ok(FileResponse {
            path: path.to_string(),
            links,
            embedded,
        })
    }
}
