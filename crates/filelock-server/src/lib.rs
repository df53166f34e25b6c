//! HTTP API for per-file locks on repositories.
//!
//! Wraps the decision layer from `filelock-core` and the config store from
//! `filelock-storage` in an axum server: lock listing, acquire and release,
//! per-repository config, and the repository and file views decorated with
//! lock links.

pub mod auth;
pub mod directory;
pub mod error;
pub mod handlers;
pub mod lock_command;
pub mod router;
pub mod schema;
pub mod service;
pub mod settings;
pub mod state;
