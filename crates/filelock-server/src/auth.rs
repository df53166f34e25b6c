//! Caller identification.
//!
//! The authenticated user id arrives in the `X-Scm-User` header, set by the
//! authenticating proxy in front of this server. Grants come from the
//! directory, so a request never carries its own permissions.

use axum::http::HeaderMap;

use filelock_core::Caller;

use crate::directory::StaticDirectory;
use crate::error::ApiError;

pub const USER_HEADER: &str = "X-Scm-User";

/// Resolves the caller of a request.
///
/// Returns `ApiError::Unauthenticated` if the header is missing, empty or
/// names an unknown user.
pub fn extract_caller(headers: &HeaderMap, directory: &StaticDirectory) -> Result<Caller, ApiError> {
    let user_id = headers
        .get(USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::Unauthenticated(format!("{} header required", USER_HEADER)))?;

    directory
        .caller(user_id)
        .ok_or_else(|| ApiError::Unauthenticated(format!("unknown user '{}'", user_id)))
}
