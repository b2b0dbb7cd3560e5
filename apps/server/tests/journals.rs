mod common;

use axum::http::StatusCode;
use common::{json_body, send, test_app};

#[tokio::test]
async fn created_entry_gets_preview_and_default_mood() {
    let (_tmp, app) = test_app().await;
    let content = "a".repeat(200);
    let body = serde_json::json!({ "content": content }).to_string();

    let response = send(&app, "POST", "/api/journals", Some(&body)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let entry = json_body(response).await;
    assert_eq!(entry["mood"], "happy");
    assert_eq!(entry["content"].as_str().unwrap().len(), 200);
    assert_eq!(entry["preview"], format!("{}...", "a".repeat(50)));
    assert!(entry["date"].as_str().is_some());
}

#[tokio::test]
async fn entries_are_listed_newest_first() {
    let (_tmp, app) = test_app().await;
    for (mood, content) in [("sad", "first"), ("neutral", "second")] {
        let body = serde_json::json!({ "mood": mood, "content": content }).to_string();
        send(&app, "POST", "/api/journals", Some(&body)).await;
    }

    let response = send(&app, "GET", "/api/journals", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let entries = json_body(response).await;
    let entries = entries.as_array().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["content"], "second");
    assert_eq!(entries[0]["mood"], "neutral");
    assert_eq!(entries[1]["content"], "first");
}

#[tokio::test]
async fn blank_entry_is_rejected() {
    let (_tmp, app) = test_app().await;

    let response = send(&app, "POST", "/api/journals", Some(r#"{"content":"   "}"#)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await["message"],
        "Failed to create journal entry"
    );
}
