//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use social_server::presentation::http::routes::create_router;
use social_server::startup::AppState;

pub const PASSWORD: &str = "Secr3t!pass";

/// Response status plus parsed JSON body (`Value::Null` when empty).
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Router over a fresh in-memory store
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            router: create_router(AppState::in_memory()),
        }
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        TestResponse { status, body }
    }

    fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Self::json_request("POST", uri, &body)).await
    }

    pub async fn patch_json(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Self::json_request("PATCH", uri, &body)).await
    }

    /// Register a user and return its id.
    pub async fn register(&self, alias: &str) -> String {
        let response = self
            .post_json(
                "/api/v1/users",
                json!({
                    "name": "Test User",
                    "email": format!("{alias}@example.com"),
                    "alias": alias,
                    "password": PASSWORD,
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        id_of(&response.body)
    }

    /// Create a post and return its id.
    pub async fn create_post(&self, author_id: &str, content: &str) -> String {
        let response = self
            .post_json(
                "/api/v1/posts",
                json!({ "author_id": author_id, "content": content }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        id_of(&response.body)
    }

    /// Comment on a post and return the comment id.
    pub async fn comment(&self, post_id: &str, author_id: &str, content: &str) -> String {
        let response = self
            .post_json(
                &format!("/api/v1/posts/{post_id}/comments"),
                json!({ "author_id": author_id, "content": content }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        id_of(&response.body)
    }
}

pub fn id_of(body: &Value) -> String {
    body["id"].as_str().unwrap().to_string()
}

/// Assert an error response's status and code.
pub fn assert_error(response: &TestResponse, status: StatusCode, code: &str) {
    assert_eq!(response.status, status, "{}", response.body);
    assert_eq!(response.body["code"], code, "{}", response.body);
}

/// Well-formed id that no stored entity uses.
pub fn unknown_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
