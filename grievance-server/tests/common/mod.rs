#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use grievance_server::chatbot::{GenerationError, GenerativeClient};
use grievance_server::{Config, ServerState, build_app};
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Generative backend that echoes the last line of user input
pub struct EchoClient;

#[async_trait]
impl GenerativeClient for EchoClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let input = prompt
            .rsplit("User: ")
            .next()
            .unwrap_or_default()
            .trim_end_matches("\nAssistant:");
        Ok(format!("You said: {input}"))
    }
}

/// App wired to the real Gemini client with no API key
pub fn unconfigured_app() -> Router {
    let config = Config::with_overrides(0, None);
    build_app(ServerState::initialize(&config))
}

/// App wired to [`EchoClient`]
pub fn echo_app() -> Router {
    let config = Config::with_overrides(0, Some("test-key".into()));
    build_app(ServerState::with_client(&config, Arc::new(EchoClient)))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}
