//! Repository and file views decorated with lock links.

use axum::extract::{Path, State};
use axum::http::HeaderMap;

use filelock_core::NamespaceAndName;

use crate::auth::extract_caller;
use crate::error::ApiError;
use crate::schema::hal::{Hal, HAL_MEDIA_TYPE};
use crate::schema::repositories::{FileResponse, RepositoryResponse};
use crate::state::AppState;

/// `GET /v2/repositories/{namespace}/{name}`
pub async fn get_repository(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Hal<RepositoryResponse>, ApiError> {
    let caller = extract_caller(&headers, &state.directory)?;
    let response = state
        .service
        .repository_view(&caller, &NamespaceAndName::new(namespace, name))?;
    Ok(Hal::new(HAL_MEDIA_TYPE, response))
}

/// `GET /v2/repositories/{namespace}/{name}/files/{path}`
pub async fn get_file(
    State(state): State<AppState>,
    Path((namespace, name, path)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Result<Hal<FileResponse>, ApiError> {
    let caller = extract_caller(&headers, &state.directory)?;
    let response = state
        .service
        .file_view(&caller, &NamespaceAndName::new(namespace, name), &path)?;
    Ok(Hal::new(HAL_MEDIA_TYPE, response))
}
