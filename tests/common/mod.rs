//! Shared helpers for driving the router in-process.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use movies_api::http_server::{HttpServer, HttpServerConfig};
use movies_api::rest_api::InMemoryMovieHandler;
use movies_api::schema::Movie;
use movies_api::store::load_default;

pub struct TestApp {
    pub router: Router,
    pub handler: Arc<InMemoryMovieHandler>,
}

impl TestApp {
    /// App over the bundled 12-movie dataset with default config
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    pub fn with_config(config: HttpServerConfig) -> Self {
        let handler = Arc::new(InMemoryMovieHandler::new(load_default().unwrap()));
        let router = HttpServer::with_handler(config, handler.clone()).router();
        Self { router, handler }
    }

    pub fn movies(&self) -> Vec<Movie> {
        self.handler.snapshot().unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> Reply {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        Reply {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> Reply {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> Reply {
        self.send(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> Reply {
        self.send(json_request("POST", uri, body)).await
    }

    pub async fn patch_json(&self, uri: &str, body: &Value) -> Reply {
        self.send(json_request("PATCH", uri, body)).await
    }
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl Reply {
    pub fn ids(&self) -> Vec<String> {
        let list = self.body.get("movies").unwrap_or(&self.body);
        list.as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_str().unwrap().to_string())
            .collect()
    }
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
