//! Core model and decision layer for per-file locking.
//!
//! This crate owns no lock state. It decides, for a repository, a caller and
//! a file path, which lock operations are permitted and which hypermedia
//! links and embedded lock data a response may carry. Everything that
//! actually holds state is reached through the collaborator traits in
//! [`traits`].
//!
//! # Modules
//!
//! - [`error`]: CoreError enum
//! - [`repository`]: Repository identity types
//! - [`permission`]: wildcard grants, the caller and the [`PermissionPolicy`]
//! - [`lock`]: LockInfo and lock command failures
//! - [`config`]: per-repository lock configuration
//! - [`links`]: HAL links and the REST link builder
//! - [`view`]: caller-relative lock views
//! - [`file_enricher`]: per-file lock link resolution
//! - [`repository_enricher`]: per-repository lock link aggregation
//! - [`traits`]: collaborator interfaces

pub mod config;
pub mod error;
pub mod file_enricher;
pub mod links;
pub mod lock;
pub mod permission;
pub mod repository;
pub mod repository_enricher;
pub mod traits;
pub mod view;

pub use config::RepositoryConfig;
pub use error::CoreError;
pub use file_enricher::{FileEnricher, FileEnrichment};
pub use links::{ensure_addressable, Link, Links, RestApiLinks};
pub use lock::{CommandError, LockInfo};
pub use permission::{
    Caller, Permission, PermissionPolicy, WildcardPermissionChecker, CONFIGURE_FILE_LOCK, PUSH,
};
pub use repository::{NamespaceAndName, Repository, RepositoryId};
pub use repository_enricher::{RepositoryEnricher, RepositoryLockLinks};
pub use traits::{LockCommand, PermissionChecker, RepositoryLookup, UserDisplayResolver};
pub use view::{LockView, LockViewMapper};
