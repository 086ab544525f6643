//! HTTP Basic authentication middleware with JSON error responses.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{Extensions, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_auth::AuthBasic;
use serde::Serialize;
use std::{collections::HashMap, sync::Arc};
use tracing::Span;

use crate::api::middleware::request_log::RequestLog;

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

/// Static credential table checked against the `Authorization` header.
///
/// Constructed once at startup and shared read-only for the process
/// lifetime. The realm is informational only.
///
/// Passwords are compared in plain text. This mirrors the observed behavior
/// of the credential table this service was built against; hashed storage
/// would be a behavioral change.
#[derive(Clone)]
pub struct BasicAuth {
    realm: String,
    users: Arc<HashMap<String, String>>,
}

impl BasicAuth {
    pub fn new(realm: impl Into<String>, users: HashMap<String, String>) -> Self {
        let auth = Self {
            realm: realm.into(),
            users: Arc::new(users),
        };
        tracing::debug!(realm = %auth.realm, "basic auth enabled");
        auth
    }

    fn validate(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|expected| expected == password)
    }
}

/// Rejects requests without valid Basic credentials.
///
/// # Responses
///
/// - Missing, malformed, or incorrect credentials: `401` with body
///   `{"error":"invalid authorization credentials"}`.
/// - Body encoding failure: `500` plain text.
///
/// Unauthorized attempts are logged through the request-scoped logger when
/// one is attached, at the root scope otherwise.
pub async fn layer(State(auth): State<BasicAuth>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    let credentials = AuthBasic::from_request_parts(&mut parts, &()).await.ok();

    let authorized = credentials.as_ref().is_some_and(|AuthBasic((user, password))| {
        auth.validate(user, password.as_deref().unwrap_or(""))
    });

    if !authorized {
        let username = credentials
            .map(|AuthBasic((user, _))| user)
            .unwrap_or_default();
        return unauthorized(&parts.extensions, &username);
    }

    next.run(Request::from_parts(parts, body)).await
}

fn unauthorized(extensions: &Extensions, username: &str) -> Response {
    let span = RequestLog::from_extensions(extensions)
        .map(|log| log.span().clone())
        .unwrap_or_else(Span::none);

    let body = match serde_json::to_string(&ErrorResponse {
        error: "invalid authorization credentials",
    }) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(parent: &span, error = %e, "failed to encode JSON response");
            return (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response();
        }
    };

    tracing::info!(parent: &span, username = %username, "unauthorized access attempt");

    (
        StatusCode::UNAUTHORIZED,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
