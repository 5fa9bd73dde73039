mod common;

use common::{echo_app, get, post, unconfigured_app};
use http::StatusCode;
use serde_json::json;

async fn start(app: &axum::Router) -> String {
    let (status, body) = post(app, "/api/chat", json!({})).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_new_conversation_has_greeting() {
    let app = unconfigured_app();
    let id = start(&app).await;

    let (status, body) = get(&app, &format!("/api/chat/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    let messages = body["data"]["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["sender"], "bot");
    assert_eq!(
        messages[0]["content"],
        "Hello! I'm your Digital Gov Drishti assistant. How can I help you today?"
    );
}

#[tokio::test]
async fn test_missing_api_key_replies_with_configuration_notice() {
    let app = unconfigured_app();
    let id = start(&app).await;

    let (status, body) = post(
        &app,
        &format!("/api/chat/{id}/messages"),
        json!({"content": "hello"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["reply"]["content"],
        "The chatbot is not properly configured. Please add your Gemini API key to the environment variables."
    );
    assert_eq!(body["data"]["failure"], "not_configured");
    assert_eq!(body["data"]["needs_configuration"], true);

    let (_, body) = get(&app, &format!("/api/chat/{id}")).await;
    assert_eq!(body["data"]["messages"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"]["needs_configuration"], true);
}

#[tokio::test]
async fn test_reply_from_backend() {
    let app = echo_app();
    let id = start(&app).await;

    let (status, body) = post(
        &app,
        &format!("/api/chat/{id}/messages"),
        json!({"content": "Is my pothole fixed?"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["reply"]["content"], "You said: Is my pothole fixed?");
    assert!(body["data"].get("failure").is_none());
    assert_eq!(body["data"]["needs_configuration"], false);

    let (_, body) = get(&app, &format!("/api/chat/{id}/preferences")).await;
    assert_eq!(body["data"][0]["topic"], "roads");
    assert_eq!(body["data"][0]["mentions"], 1);
}

#[tokio::test]
async fn test_blank_message_rejected() {
    let app = echo_app();
    let id = start(&app).await;

    let (status, body) = post(
        &app,
        &format!("/api/chat/{id}/messages"),
        json!({"content": "   "}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6002);
}

#[tokio::test]
async fn test_unknown_conversation() {
    let app = echo_app();
    let (status, body) = get(&app, "/api/chat/6f1d6c1e-8a8b-4c53-9a0e-1d2c3b4a5f60").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);
}
