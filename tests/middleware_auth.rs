mod common;

use axum::{
    Router,
    http::{HeaderValue, StatusCode, header},
    middleware,
    routing::get,
};
use axum_test::TestServer;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use url_alias::api::middleware::basic_auth::{self, BasicAuth};

const UNAUTHORIZED_BODY: &str = r#"{"error":"invalid authorization credentials"}"#;

fn make_server(reached: Arc<AtomicBool>) -> TestServer {
    let auth = BasicAuth::new("test", common::test_users());

    let app = Router::new()
        .route(
            "/protected",
            get(move || {
                let reached = reached.clone();
                async move {
                    reached.store(true, Ordering::SeqCst);
                    "ok"
                }
            }),
        )
        .route_layer(middleware::from_fn_with_state(auth, basic_auth::layer));

    TestServer::new(app).unwrap()
}

fn authorization(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap()
}

#[tokio::test]
async fn test_valid_credentials_reach_handler() {
    let reached = Arc::new(AtomicBool::new(false));
    let server = make_server(reached.clone());

    let response = server
        .get("/protected")
        .add_header(
            header::AUTHORIZATION,
            authorization(&common::basic_header("admin", "secret")),
        )
        .await;

    response.assert_status_ok();
    response.assert_text("ok");
    assert!(reached.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_wrong_password_rejected() {
    let reached = Arc::new(AtomicBool::new(false));
    let server = make_server(reached.clone());

    let response = server
        .get("/protected")
        .add_header(
            header::AUTHORIZATION,
            authorization(&common::basic_header("admin", "wrong")),
        )
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_text(UNAUTHORIZED_BODY);
    assert_eq!(
        response.header(header::CONTENT_TYPE),
        HeaderValue::from_static("application/json")
    );
    assert!(!reached.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_unknown_user_rejected() {
    let reached = Arc::new(AtomicBool::new(false));
    let server = make_server(reached.clone());

    let response = server
        .get("/protected")
        .add_header(
            header::AUTHORIZATION,
            authorization(&common::basic_header("intruder", "secret")),
        )
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_text(UNAUTHORIZED_BODY);
    assert!(!reached.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_missing_header_rejected() {
    let reached = Arc::new(AtomicBool::new(false));
    let server = make_server(reached.clone());

    let response = server.get("/protected").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_text(UNAUTHORIZED_BODY);
    assert!(!reached.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_malformed_header_rejected() {
    let reached = Arc::new(AtomicBool::new(false));
    let server = make_server(reached.clone());

    let response = server
        .get("/protected")
        .add_header(header::AUTHORIZATION, authorization("Basic not-base64!!!"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_text(UNAUTHORIZED_BODY);
    assert!(!reached.load(Ordering::SeqCst));
}
