#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use reflection_service::config::{AnthropicConfig, ReflectionConfig, WebhookConfig};
use reflection_service::services::providers::mock::MockCompletionProvider;
use reflection_service::services::SheetWebhook;
use reflection_service::{build_router, AppState};
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use tower::util::ServiceExt;

pub fn test_config(anthropic_base_url: &str, webhook_url: Option<String>) -> ReflectionConfig {
    ReflectionConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        anthropic: AnthropicConfig {
            api_key: Secret::new("test-api-key".to_string()),
            base_url: anthropic_base_url.to_string(),
        },
        webhook: WebhookConfig { url: webhook_url },
    }
}

/// Router backed by the mock provider.
pub fn mock_app(provider: Arc<MockCompletionProvider>, webhook_url: Option<String>) -> Router {
    let config = test_config("http://127.0.0.1:1", webhook_url.clone());
    let state = AppState::new(config, provider, SheetWebhook::new(webhook_url));
    build_router(state)
}

/// Router backed by the real Anthropic client pointed at `anthropic_base_url`.
pub fn live_app(anthropic_base_url: &str, webhook_url: Option<String>) -> Router {
    build_router(AppState::from_config(test_config(
        anthropic_base_url,
        webhook_url,
    )))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub async fn send(app: Router, method: Method, path: &str, body: impl Into<Body>) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body: body.to_vec(),
    }
}

pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> TestResponse {
    send(app, Method::POST, path, body.to_string()).await
}

pub fn assert_cors(headers: &HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}

pub fn valid_reflect_body() -> serde_json::Value {
    serde_json::json!({
        "questions": [
            "What do you do all day?",
            "What would you change?",
            "What do people misunderstand?"
        ],
        "answers": [
            "I keep the lights on.",
            "Nothing, honestly.",
            "That it is easy."
        ]
    })
}
