//! Schema types for the lock listing.

use serde::Serialize;

use filelock_core::{Links, LockView};

/// `GET /v2/file-lock/{namespace}/{name}` response.
#[derive(Debug, Clone, Serialize)]
pub struct FileLocksResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    #[serde(rename = "_embedded")]
    pub embedded: FileLocksEmbedded,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileLocksEmbedded {
    pub file_locks: Vec<LockView>,
}
