//! Post and Comment API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{assert_error, unknown_id, TestApp};

#[tokio::test]
async fn test_create_post_with_images() {
    let app = TestApp::new();
    let author = app.register("writer").await;

    let response = app
        .post_json(
            "/api/v1/posts",
            json!({
                "author_id": author,
                "content": "  First post  ",
                "images": ["a.jpg", "b.png"],
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    assert_eq!(response.body["content"], "First post");
    assert_eq!(response.body["images"], json!(["a.jpg", "b.png"]));
    assert_eq!(response.body["like_count"], 0);
    assert_eq!(response.body["comment_count"], 0);
}

#[tokio::test]
async fn test_create_post_with_six_images_is_rejected() {
    let app = TestApp::new();
    let author = app.register("writer").await;
    let images: Vec<String> = (0..6).map(|n| format!("img{n}.jpg")).collect();

    let response = app
        .post_json(
            "/api/v1/posts",
            json!({ "author_id": author, "content": "Too many", "images": images }),
        )
        .await;

    assert_error(
        &response,
        StatusCode::UNPROCESSABLE_ENTITY,
        "EXCEEDED_POST_IMAGE_LIMIT",
    );
}

#[tokio::test]
async fn test_create_post_for_unknown_author() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/posts",
            json!({ "author_id": unknown_id(), "content": "Hello" }),
        )
        .await;

    assert_error(&response, StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_get_post_and_author_listing() {
    let app = TestApp::new();
    let author = app.register("writer").await;
    let first = app.create_post(&author, "first").await;
    let second = app.create_post(&author, "second").await;

    let response = app.get(&format!("/api/v1/posts/{first}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["content"], "first");

    let listing = app.get(&format!("/api/v1/users/{author}/posts")).await;
    assert_eq!(listing.status, StatusCode::OK);
    let ids: Vec<&str> = listing
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&first.as_str()));
    assert!(ids.contains(&second.as_str()));
}

#[tokio::test]
async fn test_get_unknown_post_is_not_found() {
    let app = TestApp::new();
    let id = unknown_id();

    let response = app.get(&format!("/api/v1/posts/{id}")).await;

    assert_error(&response, StatusCode::NOT_FOUND, "NOT_FOUND");
    assert_eq!(response.body["message"], format!("Post not found by id: {id}"));
}

#[tokio::test]
async fn test_comment_increments_post_comment_count() {
    let app = TestApp::new();
    let author = app.register("writer").await;
    let reader = app.register("reader").await;
    let post = app.create_post(&author, "Discuss").await;

    let response = app
        .post_json(
            &format!("/api/v1/posts/{post}/comments"),
            json!({ "author_id": reader, "content": "Nice one" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    assert_eq!(response.body["post_id"], post.as_str());
    assert_eq!(response.body["content"], "Nice one");

    let post = app.get(&format!("/api/v1/posts/{post}")).await;
    assert_eq!(post.body["comment_count"], 1);
}

#[tokio::test]
async fn test_blank_comment_is_unprocessable() {
    let app = TestApp::new();
    let author = app.register("writer").await;
    let post = app.create_post(&author, "Discuss").await;

    let response = app
        .post_json(
            &format!("/api/v1/posts/{post}/comments"),
            json!({ "author_id": author, "content": "   " }),
        )
        .await;

    assert_error(&response, StatusCode::UNPROCESSABLE_ENTITY, "INVALID_VALUE_OBJECT");
}
