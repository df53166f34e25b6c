//! HTTP handler modules for the file lock API.
//!
//! Each sub-module implements thin handlers that resolve the caller, parse
//! the path, delegate to [`FileLockService`](crate::service::FileLockService)
//! and shape the response. No decisions live in handlers.

pub mod config;
pub mod locks;
pub mod repositories;
