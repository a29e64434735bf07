//! Integration tests for the demo HTTP surface.
//!
//! Exercises the full router (routes, fallback, middleware stack) without
//! binding a listener, via `tower::ServiceExt::oneshot`.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use git_hooks_demo::router::build_router;
use git_hooks_demo::{AppState, Config};

fn test_app() -> Router {
    let config = Config {
        environment: "test".to_string(),
        port: 0,
        request_timeout_secs: 5,
        log_level: "debug".to_string(),
    };
    build_router(AppState::new(config))
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn hello_returns_greeting() {
    let response = test_app().oneshot(get_request("/api/hello")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Hello from Git Hooks Demo!");
}

#[tokio::test]
async fn status_reports_running() {
    let response = test_app().oneshot(get_request("/api/status")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Application is running");
}

#[tokio::test]
async fn endpoints_are_idempotent() {
    let app = test_app();

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(get_request("/api/hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Hello from Git Hooks Demo!");

        let response = app
            .clone()
            .oneshot(get_request("/api/status"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Application is running");
    }
}

#[tokio::test]
async fn post_to_hello_is_rejected() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/hello")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_returns_structured_404() {
    let response = test_app()
        .oneshot(get_request("/api/does-not-exist"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "not_found");
    assert!(json["request_id"].is_string());
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn responses_carry_tracing_and_security_headers() {
    let response = test_app().oneshot(get_request("/api/hello")).await.unwrap();

    let headers = response.headers();
    assert!(headers.contains_key("X-Request-ID"));
    assert_eq!(headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
    assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
    assert_eq!(headers.get("X-API-Version").unwrap(), "1.0");
}
