//! Router-level integration tests for the HTTP surface.
//!
//! The router is exercised in-process with `tower::ServiceExt::oneshot`, so no
//! socket is bound and tests can run in parallel.

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use hello_service::config::{AppConfig, HttpServerConfig, LoggingConfig};
use hello_service::routes::create_router;
use hello_service::state::AppState;

fn test_state() -> AppState {
    AppState::new(AppConfig {
        http: HttpServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
        },
        logging: LoggingConfig::default(),
    })
}

/// Send a single request through a freshly-built router.
async fn send(request: Request<Body>) -> Result<Response> {
    let app = create_router(test_state());
    Ok(app.oneshot(request).await?)
}

async fn get(path: &str) -> Result<Response> {
    send(Request::builder().uri(path).body(Body::empty())?).await
}

async fn body_json(response: Response) -> Result<Value> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn root_returns_greeting() -> Result<()> {
    let response = get("/").await?;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("content type header")
        .to_str()?;
    assert!(content_type.starts_with("application/json"));

    let body = body_json(response).await?;
    assert_eq!(body, json!({"message": "hello from fastapi"}));

    Ok(())
}

#[tokio::test]
async fn health_returns_ok() -> Result<()> {
    let response = get("/health").await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await?;
    assert_eq!(body, json!({"ok": true}));

    Ok(())
}

#[tokio::test]
async fn repeated_calls_yield_identical_bodies() -> Result<()> {
    for path in ["/", "/health"] {
        let first = get(path).await?.into_body().collect().await?.to_bytes();
        let second = get(path).await?.into_body().collect().await?.to_bytes();
        assert_eq!(first, second, "{} is not idempotent", path);
    }

    Ok(())
}

#[tokio::test]
async fn post_to_root_is_method_not_allowed() -> Result<()> {
    let response = send(
        Request::builder()
            .method(Method::POST)
            .uri("/")
            .body(Body::empty())?,
    )
    .await?;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let allow = response
        .headers()
        .get(header::ALLOW)
        .expect("allow header")
        .to_str()?;
    assert!(allow.contains("GET"));

    Ok(())
}

#[tokio::test]
async fn unknown_path_is_not_found() -> Result<()> {
    let response = get("/nope").await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn greeting_is_cacheable_but_health_is_not() -> Result<()> {
    let response = get("/").await?;
    let cache = response
        .headers()
        .get(header::CACHE_CONTROL)
        .expect("cache-control on /")
        .to_str()?
        .to_string();
    assert!(cache.contains("max-age="), "unexpected cache header: {}", cache);

    let response = get("/health").await?;
    let cache = response
        .headers()
        .get(header::CACHE_CONTROL)
        .expect("cache-control on /health")
        .to_str()?;
    assert_eq!(cache, "no-store");

    Ok(())
}
