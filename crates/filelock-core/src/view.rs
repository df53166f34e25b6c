//! Caller-relative lock views.
//!
//! A [`LockView`] is derived from a [`LockInfo`] for one request: the owner
//! id is resolved to a display name and compared against the caller.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::links::{Links, RestApiLinks};
use crate::lock::LockInfo;
use crate::permission::Caller;
use crate::repository::Repository;
use crate::traits::UserDisplayResolver;

/// A lock as presented to a specific caller. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockView {
    pub path: String,
    pub user_id: String,
    #[serde(rename = "username")]
    pub display_name: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "owned")]
    pub owned_by_caller: bool,
    #[serde(rename = "_links")]
    pub links: Links,
}

/// Builds [`LockView`]s, each carrying an `unlock` link for its own path.
#[derive(Clone)]
pub struct LockViewMapper {
    links: RestApiLinks,
    users: Arc<dyn UserDisplayResolver>,
}

impl LockViewMapper {
    pub fn new(links: RestApiLinks, users: Arc<dyn UserDisplayResolver>) -> Self {
        LockViewMapper { links, users }
    }

    pub fn map(&self, repository: &Repository, lock: &LockInfo, caller: &Caller) -> LockView {
        LockView {
            path: lock.path.clone(),
            user_id: lock.user_id.clone(),
            display_name: self.users.resolve(&lock.user_id),
            timestamp: lock.timestamp,
            owned_by_caller: lock.user_id == caller.principal(),
            links: Links::new().with("unlock", self.links.unlock_file(repository, &lock.path)),
        }
    }
}

impl fmt::Debug for LockViewMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockViewMapper")
            .field("links", &self.links)
            .finish_non_exhaustive()
    }
}
