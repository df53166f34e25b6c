//! HAL links and the builder for this plugin's REST links.
//!
//! Every dynamic value (namespace, name, file path) is pushed as a single
//! percent-encoded path segment, so `src/main.rs` renders as `src%2Fmain.rs`
//! and the whole relative path stays one opaque segment.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::CoreError;
use crate::repository::Repository;

/// A single hypermedia reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Link { href: href.into() }
    }
}

/// Named links of a HAL resource, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(IndexMap<String, Link>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, rel: impl Into<String>, link: Link) -> Self {
        self.insert(rel, link);
        self
    }

    pub fn insert(&mut self, rel: impl Into<String>, link: Link) {
        self.0.insert(rel.into(), link);
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0.get(rel)
    }

    pub fn contains(&self, rel: &str) -> bool {
        self.0.contains_key(rel)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn rels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Rejects values that cannot be rendered as one path segment.
///
/// URL parsers remove `.` and `..` segments (encoded or not), so a link
/// carrying one would point at a different resource.
pub fn ensure_addressable(value: &str) -> Result<(), CoreError> {
    match value {
        "" | "." | ".." => Err(CoreError::UnaddressableSegment(value.to_string())),
        _ => Ok(()),
    }
}

const API_VERSION: &str = "v2";
const FILE_LOCK: &str = "file-lock";
const REPOSITORIES: &str = "repositories";

/// Renders absolute links below the REST API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestApiLinks {
    base: Url,
}

impl RestApiLinks {
    /// Creates a link builder for an absolute base such as `https://scm.example.com/scm/api/`.
    pub fn new(base: &str) -> Result<Self, CoreError> {
        let parsed = Url::parse(base).map_err(|e| CoreError::InvalidBaseUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(CoreError::InvalidBaseUrl {
                url: base.to_string(),
                reason: "url cannot carry path segments".to_string(),
            });
        }
        Ok(RestApiLinks { base: parsed })
    }

    /// `v2/file-lock/{namespace}/{name}`: all locks of a repository.
    pub fn file_locks(&self, repository: &Repository) -> Link {
        self.build(&[API_VERSION, FILE_LOCK, &repository.namespace, &repository.name])
    }

    /// `v2/file-lock/{namespace}/{name}/lock/{path}`: acquire a lock.
    pub fn lock_file(&self, repository: &Repository, path: &str) -> Link {
        self.build(&[
            API_VERSION,
            FILE_LOCK,
            &repository.namespace,
            &repository.name,
            "lock",
            path,
        ])
    }

    /// Release shares the lock resource; only the HTTP method differs.
    pub fn unlock_file(&self, repository: &Repository, path: &str) -> Link {
        self.lock_file(repository, path)
    }

    /// `v2/file-lock/{namespace}/{name}/config`: read or replace the config.
    pub fn config(&self, repository: &Repository) -> Link {
        self.build(&[
            API_VERSION,
            FILE_LOCK,
            &repository.namespace,
            &repository.name,
            "config",
        ])
    }

    pub fn repository(&self, repository: &Repository) -> Link {
        self.build(&[API_VERSION, REPOSITORIES, &repository.namespace, &repository.name])
    }

    pub fn file(&self, repository: &Repository, path: &str) -> Link {
        self.build(&[
            API_VERSION,
            REPOSITORIES,
            &repository.namespace,
            &repository.name,
            "files",
            path,
        ])
    }

    fn build(&self, segments: &[&str]) -> Link {
        let mut url = self.base.clone();
        // cannot_be_a_base was rejected in `new`, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Link::new(url.as_str())
    }
}
