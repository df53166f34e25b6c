//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce structured JSON error responses
//! with appropriate HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use filelock_core::{CommandError, CoreError};
use filelock_storage::StorageError;

/// Structured error detail in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "FORBIDDEN").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No or unknown caller identity (401).
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// Caller lacks a required grant (403).
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Entity not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Lock held by someone else (409).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Unauthenticated(_) => (StatusCode::UNAUTHORIZED, "UNAUTHENTICATED"),
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            ApiError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::Unauthenticated(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::Conflict(msg)
            | ApiError::InternalError(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let detail = ApiErrorDetail {
            code: code.to_string(),
            message: self.message().to_string(),
        };
        let body = serde_json::json!({
            "success": false,
            "error": detail,
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::RepositoryNotFound(_) => ApiError::NotFound(err.to_string()),
            CoreError::Unauthorized { .. } => ApiError::Forbidden(err.to_string()),
            CoreError::UnaddressableSegment(_) => ApiError::BadRequest(err.to_string()),
            CoreError::Command(command) => command.into(),
            CoreError::InvalidPermission(_) | CoreError::InvalidBaseUrl { .. } => {
                ApiError::InternalError(err.to_string())
            }
        }
    }
}

impl From<CommandError> for ApiError {
    fn from(err: CommandError) -> Self {
        match &err {
            CommandError::AlreadyLocked { .. } | CommandError::NotOwner { .. } => {
                ApiError::Conflict(err.to_string())
            }
            CommandError::Unsupported { .. } => ApiError::BadRequest(err.to_string()),
            CommandError::Failed(_) => ApiError::InternalError(err.to_string()),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Core(core) => core.into(),
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use filelock_core::NamespaceAndName;

    use super::*;

    #[test]
    fn unauthorized_maps_to_forbidden() {
        let err: ApiError = CoreError::Unauthorized {
            principal: "dent".to_string(),
            action: "push".to_string(),
            repository: "hitchhiker/HeartOfGold".to_string(),
        }
        .into();
        assert_eq!(err.status_and_code().0, StatusCode::FORBIDDEN);
    }

    #[test]
    fn missing_repository_maps_to_not_found() {
        let err: ApiError =
            CoreError::RepositoryNotFound(NamespaceAndName::new("hitchhiker", "nope")).into();
        assert_eq!(err.status_and_code().0, StatusCode::NOT_FOUND);
    }

    #[test]
    fn unaddressable_segment_maps_to_bad_request() {
        let err: ApiError = CoreError::UnaddressableSegment("..".to_string()).into();
        assert_eq!(err.status_and_code().0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn lock_conflict_maps_to_conflict() {
        let err: ApiError = CommandError::AlreadyLocked {
            path: "a".to_string(),
            owner: "zaphod".to_string(),
        }
        .into();
        assert_eq!(err.status_and_code().0, StatusCode::CONFLICT);
    }

    #[test]
    fn storage_permission_failure_stays_forbidden() {
        let err: ApiError = StorageError::Core(CoreError::Unauthorized {
            principal: "dent".to_string(),
            action: "configureFileLock".to_string(),
            repository: "hitchhiker/HeartOfGold".to_string(),
        })
        .into();
        assert_eq!(err.status_and_code().0, StatusCode::FORBIDDEN);

        let err: ApiError = StorageError::Migration("boom".to_string()).into();
        assert_eq!(err.status_and_code().0, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
