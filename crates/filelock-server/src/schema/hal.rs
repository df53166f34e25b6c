//! HAL response wrapper with vendor media types.

use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::ApiError;

/// Media type of the lock listing.
pub const FILE_LOCK_MEDIA_TYPE: &str = "application/vnd.scmm-file-lock+json;v=2";

/// Media type of the repository lock configuration.
pub const FILE_LOCK_CONFIG_MEDIA_TYPE: &str = "application/vnd.scmm-file-lock-config+json;v=2";

pub const HAL_MEDIA_TYPE: &str = "application/hal+json";

/// A JSON body served with an explicit media type.
#[derive(Debug, Clone)]
pub struct Hal<T> {
    media_type: &'static str,
    body: T,
}

impl<T> Hal<T> {
    pub fn new(media_type: &'static str, body: T) -> Self {
        Hal { media_type, body }
    }
}

impl<T: Serialize> IntoResponse for Hal<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.body) {
            Ok(bytes) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static(self.media_type))],
                bytes,
            )
                .into_response(),
            Err(err) => ApiError::InternalError(format!("failed to serialize response: {}", err))
                .into_response(),
        }
    }
}
