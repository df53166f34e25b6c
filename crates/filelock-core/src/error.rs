//! Core error types for filelock-core.
//!
//! Permission failures are returned as [`CoreError::Unauthorized`] from the
//! `check_*` guards so mutation paths cannot silently ignore them.

use thiserror::Error;

use crate::lock::CommandError;
use crate::repository::NamespaceAndName;

/// Core errors produced by the filelock-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No repository exists for the given namespace and name.
    #[error("repository not found: {0}")]
    RepositoryNotFound(NamespaceAndName),

    /// The caller lacks a grant required by a checked operation.
    #[error("subject '{principal}' is not permitted to {action} repository {repository}")]
    Unauthorized {
        principal: String,
        action: String,
        repository: String,
    },

    /// A grant string could not be parsed.
    #[error("invalid permission '{0}'")]
    InvalidPermission(String),

    /// A value that URL parsers drop as a dot segment or that is empty.
    #[error("'{0}' cannot be addressed as a single path segment")]
    UnaddressableSegment(String),

    /// The configured API base URL cannot carry path segments.
    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The lock command reported a failure.
    #[error(transparent)]
    Command(#[from] CommandError),
}
