//! Storage for per-repository file lock configuration.
//!
//! Provides the [`ConfigStore`] trait defining the raw persistence contract,
//! the [`InMemoryConfigStore`] and [`SqliteConfigStore`] backends, and
//! [`RepositoryConfigStore`], the permission-guarded facade used by request
//! handlers.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum
//! - [`traits`]: ConfigStore trait definition
//! - [`memory`]: DashMap-backed store
//! - [`schema`]: SQL migrations and connection setup
//! - [`sqlite`]: SQLite-backed store
//! - [`repository_config`]: defaulting reads and checked writes

pub mod error;
pub mod memory;
pub mod repository_config;
pub mod schema;
pub mod sqlite;
pub mod traits;

pub use error::StorageError;
pub use memory::InMemoryConfigStore;
pub use repository_config::RepositoryConfigStore;
pub use sqlite::SqliteConfigStore;
pub use traits::ConfigStore;
