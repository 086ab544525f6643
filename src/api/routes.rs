//! API route configuration.
//!
//! All API endpoints require Basic authentication via
//! [`crate::api::middleware::basic_auth`].

use crate::api::handlers::{delete_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// All API routes, protected by Basic authentication.
///
/// # Endpoints
///
/// - `POST   /url`          - Store a URL under an alias
/// - `DELETE /url/{alias}`  - Delete an alias
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/url/{alias}", delete(delete_handler))
}
