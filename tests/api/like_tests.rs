//! Like API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{assert_error, unknown_id, TestApp};

#[tokio::test]
async fn test_like_post_once() {
    let app = TestApp::new();
    let author = app.register("writer").await;
    let fan = app.register("fan").await;
    let post = app.create_post(&author, "Like me").await;
    let uri = format!("/api/v1/posts/{post}/likes");

    let first = app.post_json(&uri, json!({ "user_id": fan })).await;
    assert_eq!(first.status, StatusCode::CREATED, "{}", first.body);
    assert_eq!(first.body["target_id"], post.as_str());
    assert_eq!(first.body["like_count"], 1);

    let second = app.post_json(&uri, json!({ "user_id": fan })).await;
    assert_error(&second, StatusCode::CONFLICT, "USER_ALREADY_LIKED_POST");

    let post = app.get(&format!("/api/v1/posts/{post}")).await;
    assert_eq!(post.body["like_count"], 1);
}

#[tokio::test]
async fn test_two_users_like_same_post() {
    let app = TestApp::new();
    let author = app.register("writer").await;
    let post = app.create_post(&author, "Like me").await;
    let uri = format!("/api/v1/posts/{post}/likes");

    app.post_json(&uri, json!({ "user_id": author })).await;
    let other = app.register("fan").await;
    let response = app.post_json(&uri, json!({ "user_id": other })).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["like_count"], 2);
}

#[tokio::test]
async fn test_like_comment_once() {
    let app = TestApp::new();
    let author = app.register("writer").await;
    let post = app.create_post(&author, "Discuss").await;
    let comment = app.comment(&post, &author, "First!").await;
    let uri = format!("/api/v1/comments/{comment}/likes");

    let first = app.post_json(&uri, json!({ "user_id": author })).await;
    assert_eq!(first.status, StatusCode::CREATED, "{}", first.body);
    assert_eq!(first.body["like_count"], 1);

    let second = app.post_json(&uri, json!({ "user_id": author })).await;
    assert_error(&second, StatusCode::CONFLICT, "USER_ALREADY_LIKED_COMMENT");
}

#[tokio::test]
async fn test_like_requires_user_id() {
    let app = TestApp::new();
    let author = app.register("writer").await;
    let post = app.create_post(&author, "Like me").await;

    let response = app
        .post_json(&format!("/api/v1/posts/{post}/likes"), json!({ "user_id": " " }))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "MISSING_REQUIRED_FIELDS");
    assert_eq!(response.body["message"], "Missing required field: [user_id]");
}

#[tokio::test]
async fn test_like_unknown_comment() {
    let app = TestApp::new();
    let fan = app.register("fan").await;
    let id = unknown_id();

    let response = app
        .post_json(&format!("/api/v1/comments/{id}/likes"), json!({ "user_id": fan }))
        .await;

    assert_error(&response, StatusCode::NOT_FOUND, "NOT_FOUND");
    assert_eq!(response.body["message"], format!("Comment not found by id: {id}"));
}

#[tokio::test]
async fn test_liked_posts_lists_what_user_liked() {
    let app = TestApp::new();
    let author = app.register("writer").await;
    let fan = app.register("fan").await;
    let liked = app.create_post(&author, "Liked").await;
    app.create_post(&author, "Ignored").await;

    let like = app
        .post_json(&format!("/api/v1/posts/{liked}/likes"), json!({ "user_id": fan }))
        .await;
    assert_eq!(like.status, StatusCode::CREATED, "{}", like.body);

    let response = app.get(&format!("/api/v1/users/{fan}/liked-posts")).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    let posts = response.body.as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["id"], liked.as_str());
    assert_eq!(posts[0]["like_count"], 1);

    let none = app.get(&format!("/api/v1/users/{author}/liked-posts")).await;
    assert_eq!(none.body, json!([]));
}

#[tokio::test]
async fn test_liked_posts_of_unknown_user() {
    let app = TestApp::new();
    let id = unknown_id();

    let response = app.get(&format!("/api/v1/users/{id}/liked-posts")).await;

    assert_error(&response, StatusCode::NOT_FOUND, "NOT_FOUND");
    assert_eq!(response.body["message"], format!("User not found by id: {id}"));
}

#[tokio::test]
async fn test_comment_count_follows_comments() {
    let app = TestApp::new();
    let author = app.register("writer").await;
    let post = app.create_post(&author, "Discuss").await;

    app.comment(&post, &author, "One").await;
    app.comment(&post, &author, "Two").await;

    let response = app.get(&format!("/api/v1/posts/{post}")).await;
    assert_eq!(response.body["comment_count"], 2);
}
