#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use responder_api::config::{NegotiationConfig, ServerConfig};
use responder_api::router::build_app_router;
use responder_api::state::AppState;

/// Build a test `ServerConfig` accepting `content_type`.
pub fn test_config(content_type: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        negotiation: NegotiationConfig::new(content_type),
    }
}

/// Build the full application router, mirroring `main.rs`.
pub fn build_test_app() -> Router {
    build_test_app_with(test_config("application/json"))
}

pub fn build_test_app_with(config: ServerConfig) -> Router {
    build_app_router(AppState::new(config))
}

/// Send a request with optional `Content-Type` / `Accept` headers and body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    accept: Option<&str>,
    body: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    if let Some(accept) = accept {
        builder = builder.header("accept", accept);
    }
    let body = body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty);

    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// GET with the given `Accept` header.
pub async fn get(app: Router, uri: &str, accept: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(accept), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
