//! # URL Alias
//!
//! A small URL alias service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Repository traits for alias storage
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite-backed repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! Every request passes through the request-logging middleware, which
//! attaches a correlated, request-scoped logger to the request and emits one
//! completion record per request. The API subtree additionally sits behind a
//! Basic-authentication gate with a static credential table.
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage/url-alias.db"
//! export HTTP_USER="admin"
//! export HTTP_PASSWORD="secret"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;

pub use error::{AppError, StorageError};
pub use state::AppState;
