//! Repository identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, stable repository identifier assigned by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryId(pub String);

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RepositoryId {
    fn from(id: &str) -> Self {
        RepositoryId(id.to_string())
    }
}

/// The public address of a repository: `namespace/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamespaceAndName {
    pub namespace: String,
    pub name: String,
}

impl NamespaceAndName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        NamespaceAndName {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for NamespaceAndName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// A repository as handed out by the host's repository lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: RepositoryId,
    /// Backing type, e.g. `git`. Decides whether the lock command is available.
    #[serde(rename = "type")]
    pub kind: String,
    pub namespace: String,
    pub name: String,
}

impl Repository {
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Repository {
            id: RepositoryId(id.into()),
            kind: kind.into(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn namespace_and_name(&self) -> NamespaceAndName {
        NamespaceAndName::new(self.namespace.clone(), self.name.clone())
    }
}
