//! Cross-Origin Policy Tests
//!
//! - Requests without an Origin header are served
//! - Allow-listed origins are served and get CORS headers
//! - Any other origin is refused with 403 and no body

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::Value;

use common::TestApp;
use movies_api::http_server::HttpServerConfig;

fn get_with_origin(uri: &str, origin: &str) -> Request<Body> {
    Request::get(uri)
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_request_without_origin_is_served() {
    let app = TestApp::new();
    let reply = app.get("/movies").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply
        .headers
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_allowed_origin_gets_cors_headers() {
    let app = TestApp::new();
    let reply = app
        .send(get_with_origin("/movies", "http://localhost:5500"))
        .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(
        reply.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5500"
    );
}

#[tokio::test]
async fn test_unknown_origin_is_refused() {
    let app = TestApp::new();
    let reply = app
        .send(get_with_origin("/movies", "http://evil.example"))
        .await;

    assert_eq!(reply.status, StatusCode::FORBIDDEN);
    assert_eq!(reply.body, Value::Null);
}

#[tokio::test]
async fn test_refused_origin_cannot_mutate() {
    let app = TestApp::new();
    let target = app.movies()[0].id.clone();

    let request = Request::delete(format!("/movies/{}", target))
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();
    let reply = app.send(request).await;

    assert_eq!(reply.status, StatusCode::FORBIDDEN);
    assert_eq!(app.movies().len(), 12);
}

#[tokio::test]
async fn test_preflight_from_allowed_origin() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/movies/some-id")
        .header(header::ORIGIN, "http://localhost:1234")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
        .body(Body::empty())
        .unwrap();

    let reply = app.send(request).await;
    assert!(reply.status.is_success());
    let methods = reply
        .headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("PATCH"));
    assert!(methods.contains("DELETE"));
}

#[tokio::test]
async fn test_configured_origins_replace_defaults() {
    let config = HttpServerConfig {
        cors_origins: vec!["https://movies.example".to_string()],
        ..Default::default()
    };
    let app = TestApp::with_config(config);

    let allowed = app
        .send(get_with_origin("/", "https://movies.example"))
        .await;
    assert_eq!(allowed.status, StatusCode::OK);

    let refused = app
        .send(get_with_origin("/", "http://localhost:5500"))
        .await;
    assert_eq!(refused.status, StatusCode::FORBIDDEN);
}
