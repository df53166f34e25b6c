//! Lock listing, acquire and release handlers.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};

use filelock_core::NamespaceAndName;

use crate::auth::extract_caller;
use crate::error::ApiError;
use crate::schema::hal::{Hal, FILE_LOCK_MEDIA_TYPE};
use crate::schema::locks::FileLocksResponse;
use crate::state::AppState;

/// `GET /v2/file-lock/{namespace}/{name}`
pub async fn list_locks(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Hal<FileLocksResponse>, ApiError> {
    let caller = extract_caller(&headers, &state.directory)?;
    let response = state
        .service
        .list_locks(&caller, &NamespaceAndName::new(namespace, name))?;
    Ok(Hal::new(FILE_LOCK_MEDIA_TYPE, response))
}

/// `POST /v2/file-lock/{namespace}/{name}/lock/{path}`
pub async fn lock_file(
    State(state): State<AppState>,
    Path((namespace, name, path)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let caller = extract_caller(&headers, &state.directory)?;
    state
        .service
        .lock_file(&caller, &NamespaceAndName::new(namespace, name), &path)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /v2/file-lock/{namespace}/{name}/lock/{path}`
///
/// Always forced; `204` also when the file was not locked.
pub async fn unlock_file(
    State(state): State<AppState>,
    Path((namespace, name, path)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let caller = extract_caller(&headers, &state.directory)?;
    state
        .service
        .unlock_file(&caller, &NamespaceAndName::new(namespace, name), &path)?;
    Ok(StatusCode::NO_CONTENT)
}
