//! User API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{assert_error, unknown_id, TestApp, PASSWORD};

#[tokio::test]
async fn test_register_returns_normalized_user() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/users",
            json!({
                "name": "  Ada Lovelace ",
                "email": " Ada@Example.COM ",
                "alias": "ada",
                "password": PASSWORD,
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "Ada Lovelace");
    assert_eq!(response.body["email"], "ada@example.com");
    assert_eq!(response.body["alias"], "ada");
    assert!(response.body.get("password").is_none());
}

#[tokio::test]
async fn test_register_lists_absent_fields() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/v1/users", json!({ "name": "Ada Lovelace" }))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "MISSING_REQUIRED_FIELDS");
    assert_eq!(
        response.body["message"],
        "Missing required fields: [alias, email, password]"
    );
}

#[tokio::test]
async fn test_register_without_body_is_bad_request() {
    let app = TestApp::new();

    let response = app.post_json("/api/v1/users", json!("not an object")).await;

    assert_error(&response, StatusCode::BAD_REQUEST, "MISSING_REQUIRED_FIELDS");
}

#[tokio::test]
async fn test_register_numeric_alias_is_unprocessable() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/users",
            json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "alias": "12345",
                "password": PASSWORD,
            }),
        )
        .await;

    assert_error(&response, StatusCode::UNPROCESSABLE_ENTITY, "INVALID_VALUE_OBJECT");
    assert_eq!(response.body["type"], "Domain");
    assert_eq!(response.body["details"]["field"], "Alias");
}

#[tokio::test]
async fn test_register_duplicate_alias_conflicts() {
    let app = TestApp::new();
    app.register("ada").await;

    let response = app
        .post_json(
            "/api/v1/users",
            json!({
                "name": "Other Ada",
                "email": "other@example.com",
                "alias": "ada",
                "password": PASSWORD,
            }),
        )
        .await;

    assert_error(&response, StatusCode::CONFLICT, "ALIAS_ALREADY_USED");
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new();
    app.register("ada").await;

    let response = app
        .post_json(
            "/api/v1/users",
            json!({
                "name": "Other Ada",
                "email": "ADA@example.com",
                "alias": "ada2",
                "password": PASSWORD,
            }),
        )
        .await;

    assert_error(&response, StatusCode::CONFLICT, "EMAIL_ALREADY_USED");
}

#[tokio::test]
async fn test_get_user_by_id_and_alias() {
    let app = TestApp::new();
    let id = app.register("grace").await;

    let by_id = app.get(&format!("/api/v1/users/{id}")).await;
    assert_eq!(by_id.status, StatusCode::OK);
    assert_eq!(by_id.body["alias"], "grace");

    let by_alias = app.get("/api/v1/users?alias=grace").await;
    assert_eq!(by_alias.status, StatusCode::OK);
    assert_eq!(by_alias.body["id"], id.as_str());
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let app = TestApp::new();
    let id = unknown_id();

    let response = app.get(&format!("/api/v1/users/{id}")).await;

    assert_error(&response, StatusCode::NOT_FOUND, "NOT_FOUND");
    assert_eq!(response.body["message"], format!("User not found by id: {id}"));
}

#[tokio::test]
async fn test_malformed_user_id_is_unprocessable() {
    let app = TestApp::new();

    let response = app.get("/api/v1/users/not-a-uuid").await;

    assert_error(&response, StatusCode::UNPROCESSABLE_ENTITY, "INVALID_VALUE_OBJECT");
}

#[tokio::test]
async fn test_alias_query_parameter_is_required() {
    let app = TestApp::new();

    for uri in ["/api/v1/users", "/api/v1/users?alias=", "/api/v1/users?alias=%20"] {
        let response = app.get(uri).await;
        assert_error(&response, StatusCode::BAD_REQUEST, "MISSING_REQUIRED_PARAMETERS");
        assert_eq!(response.body["message"], "Missing required parameter: [alias]");
    }
}

#[tokio::test]
async fn test_update_profile_keeps_own_alias() {
    let app = TestApp::new();
    let id = app.register("ada").await;

    let response = app
        .patch_json(
            &format!("/api/v1/users/{id}"),
            json!({ "alias": "ada", "name": "Ada King" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    assert_eq!(response.body["name"], "Ada King");
    assert_eq!(response.body["alias"], "ada");
}

#[tokio::test]
async fn test_update_profile_to_taken_alias_conflicts() {
    let app = TestApp::new();
    app.register("ada").await;
    let grace = app.register("grace").await;

    let response = app
        .patch_json(&format!("/api/v1/users/{grace}"), json!({ "alias": "ada" }))
        .await;

    assert_error(&response, StatusCode::CONFLICT, "ALIAS_ALREADY_USED");
}

#[tokio::test]
async fn test_update_profile_with_uppercase_id_keeps_own_email() {
    let app = TestApp::new();
    let id = app.register("ada").await;
    let upper = id.to_uppercase();

    let response = app
        .patch_json(
            &format!("/api/v1/users/{upper}"),
            json!({ "email": "ada@example.com", "name": "Ada King" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    assert_eq!(response.body["id"], id.as_str());
    assert_eq!(response.body["email"], "ada@example.com");
}
