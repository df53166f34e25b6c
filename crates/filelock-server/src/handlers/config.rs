//! Repository lock configuration handlers.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use filelock_core::NamespaceAndName;

use crate::auth::extract_caller;
use crate::error::ApiError;
use crate::schema::config::{RepositoryConfigResponse, UpdateRepositoryConfigRequest};
use crate::schema::hal::{Hal, FILE_LOCK_CONFIG_MEDIA_TYPE};
use crate::state::AppState;

/// `GET /v2/file-lock/{namespace}/{name}/config`
pub async fn get_config(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Hal<RepositoryConfigResponse>, ApiError> {
    let caller = extract_caller(&headers, &state.directory)?;
    let response = state
        .service
        .get_config(&caller, &NamespaceAndName::new(namespace, name))?;
    Ok(Hal::new(FILE_LOCK_CONFIG_MEDIA_TYPE, response))
}

/// `PUT /v2/file-lock/{namespace}/{name}/config`
pub async fn update_config(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
    headers: HeaderMap,
    Json(req): Json<UpdateRepositoryConfigRequest>,
) -> Result<StatusCode, ApiError> {
    let caller = extract_caller(&headers, &state.directory)?;
    state.service.update_config(
        &caller,
        &NamespaceAndName::new(namespace, name),
        req.into(),
    )?;
    Ok(StatusCode::NO_CONTENT)
}
