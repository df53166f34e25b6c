//! API schema types for request/response definitions.
//!
//! Responses are HAL resources: their links live under `_links`, nested
//! resources under `_embedded`.

pub mod config;
pub mod hal;
pub mod locks;
pub mod repositories;
