//! Block API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{assert_error, unknown_id, TestApp};

#[tokio::test]
async fn test_block_then_unblock() {
    let app = TestApp::new();
    let ada = app.register("ada").await;
    let bob = app.register("bob").await;

    let block = app
        .post_json(
            &format!("/api/v1/users/{ada}/blocks"),
            json!({ "blocked_id": bob }),
        )
        .await;
    assert_eq!(block.status, StatusCode::CREATED, "{}", block.body);
    assert_eq!(block.body["blocker_id"], ada.as_str());
    assert_eq!(block.body["blocked_id"], bob.as_str());

    let again = app
        .post_json(
            &format!("/api/v1/users/{ada}/blocks"),
            json!({ "blocked_id": bob }),
        )
        .await;
    assert_error(&again, StatusCode::CONFLICT, "USER_ALREADY_BLOCKED");

    let unblock = app.delete(&format!("/api/v1/users/{ada}/blocks/{bob}")).await;
    assert_eq!(unblock.status, StatusCode::NO_CONTENT);

    let unblock_again = app.delete(&format!("/api/v1/users/{ada}/blocks/{bob}")).await;
    assert_error(&unblock_again, StatusCode::NOT_FOUND, "USER_IS_NOT_BLOCKED");
}

#[tokio::test]
async fn test_block_is_directional() {
    let app = TestApp::new();
    let ada = app.register("ada").await;
    let bob = app.register("bob").await;

    app.post_json(
        &format!("/api/v1/users/{ada}/blocks"),
        json!({ "blocked_id": bob }),
    )
    .await;
    let reverse = app
        .post_json(
            &format!("/api/v1/users/{bob}/blocks"),
            json!({ "blocked_id": ada }),
        )
        .await;

    assert_eq!(reverse.status, StatusCode::CREATED, "{}", reverse.body);
}

#[tokio::test]
async fn test_cannot_block_yourself() {
    let app = TestApp::new();
    let ada = app.register("ada").await;

    let response = app
        .post_json(
            &format!("/api/v1/users/{ada}/blocks"),
            json!({ "blocked_id": ada }),
        )
        .await;

    assert_error(&response, StatusCode::UNPROCESSABLE_ENTITY, "CANNOT_BLOCK_YOURSELF");
}

#[tokio::test]
async fn test_block_unknown_user_is_not_found() {
    let app = TestApp::new();
    let ada = app.register("ada").await;

    let response = app
        .post_json(
            &format!("/api/v1/users/{ada}/blocks"),
            json!({ "blocked_id": unknown_id() }),
        )
        .await;

    assert_error(&response, StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_block_requires_blocked_id() {
    let app = TestApp::new();
    let ada = app.register("ada").await;

    let response = app
        .post_json(&format!("/api/v1/users/{ada}/blocks"), json!({}))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "MISSING_REQUIRED_FIELDS");
}

#[tokio::test]
async fn test_cannot_block_yourself_with_differently_cased_id() {
    let app = TestApp::new();
    let ada = app.register("ada").await;

    let response = app
        .post_json(
            &format!("/api/v1/users/{ada}/blocks"),
            json!({ "blocked_id": ada.to_uppercase() }),
        )
        .await;

    assert_error(&response, StatusCode::UNPROCESSABLE_ENTITY, "CANNOT_BLOCK_YOURSELF");
}
