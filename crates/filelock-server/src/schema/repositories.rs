//! Schema types for the repository and file views carrying lock links.

use serde::Serialize;

use filelock_core::{Links, LockView};

/// `GET /v2/repositories/{namespace}/{name}` response.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryResponse {
    pub namespace: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "_links")]
    pub links: Links,
}

/// `GET /v2/repositories/{namespace}/{name}/files/{path}` response.
#[derive(Debug, Clone, Serialize)]
pub struct FileResponse {
    pub path: String,
    #[serde(rename = "_links")]
    pub links: Links,
    #[serde(rename = "_embedded", skip_serializing_if = "Option::is_none")]
    pub embedded: Option<FileEmbedded>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEmbedded {
    pub file_lock: LockView,
}
