//! Lock data as reported by the lock command, and its failure modes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A lock held on a single file path. Read per query, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockInfo {
    pub path: String,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
}

impl LockInfo {
    pub fn new(path: impl Into<String>, user_id: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        LockInfo {
            path: path.into(),
            user_id: user_id.into(),
            timestamp,
        }
    }
}

/// Failures reported by a [`LockCommand`](crate::traits::LockCommand).
///
/// These are passed through unchanged; nothing in this layer retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The path is locked by another user.
    #[error("file '{path}' is locked by '{owner}'")]
    AlreadyLocked { path: String, owner: String },

    /// A non-forced unlock was attempted by someone other than the owner.
    #[error("file '{path}' is locked by '{owner}' and cannot be unlocked without force")]
    NotOwner { path: String, owner: String },

    /// The repository type has no lock command.
    #[error("file locks are not supported by repository {repository}")]
    Unsupported { repository: String },

    /// Any other failure of the underlying command.
    #[error("lock command failed: {0}")]
    Failed(String),
}
