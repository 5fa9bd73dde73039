mod common;

use common::{get, post, unconfigured_app};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_feed_reactions() {
    let app = unconfigured_app();

    let (status, body) = get(&app, "/api/feed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 8);

    let (status, body) = post(&app, "/api/feed/3/like", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["likes"], 251);

    let (_, body) = post(&app, "/api/feed/3/dislike", json!({})).await;
    assert_eq!(body["data"]["likes"], 251);
    assert_eq!(body["data"]["dislikes"], 21);

    let (status, body) = post(&app, "/api/feed/99/like", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 5001);
}

#[tokio::test]
async fn test_hot_topics_filter() {
    let app = unconfigured_app();

    let (_, body) = get(&app, "/api/hot-topics").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let (status, body) = get(&app, "/api/hot-topics?min_engagement=very_high").await;
    assert_eq!(status, StatusCode::OK);
    let topics = body["data"].as_array().unwrap();
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0]["engagement"], "Very High");
}

#[tokio::test]
async fn test_file_appeal() {
    let app = unconfigured_app();

    let (status, body) = post(
        &app,
        "/api/appeals",
        json!({"authority": "court", "reason": "No response in a month", "complaint_id": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["authority_name"], "Local Court");

    let (status, body) = post(
        &app,
        "/api/appeals",
        json!({"authority": "inspector", "reason": ""}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5101);

    let (_, body) = get(&app, "/api/appeals").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}
