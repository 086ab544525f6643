//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /{alias}` - Alias redirect (public)
//! - `/api/*`       - REST API (Basic authentication required)
//!
//! # Middleware
//!
//! - **Request id** - Unique correlation id per request (`x-request-id`)
//! - **Request logging** - Request-scoped logger and completion records
//! - **Authentication** - Basic credentials on the API subtree
//!
//! The request-id layer runs outermost so the logging middleware can pick up
//! the correlation id; the logging middleware wraps everything else so the
//! auth gate finds the request-scoped logger in the extensions.

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{basic_auth, request_log};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, auth: basic_auth::BasicAuth) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(auth, basic_auth::layer));

    Router::new()
        .route("/{alias}", get(redirect_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(middleware::from_fn(request_log::layer))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
