//! Schema types for the repository lock configuration.

use serde::{Deserialize, Serialize};

use filelock_core::{Links, RepositoryConfig};

/// `GET /v2/file-lock/{namespace}/{name}/config` response.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryConfigResponse {
    pub enabled: bool,
    #[serde(rename = "_links")]
    pub links: Links,
}

/// `PUT /v2/file-lock/{namespace}/{name}/config` body.
///
/// Unknown fields (such as echoed `_links`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRepositoryConfigRequest {
    pub enabled: bool,
}

impl From<UpdateRepositoryConfigRequest> for RepositoryConfig {
    fn from(req: UpdateRepositoryConfigRequest) -> Self {
        RepositoryConfig {
            enabled: req.enabled,
        }
    }
}
