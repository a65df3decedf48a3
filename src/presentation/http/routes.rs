//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user_routes())
        .nest("/posts", post_routes())
        .nest("/comments", comment_routes())
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(handlers::user::register).get(handlers::user::find_by_alias),
        )
        .route(
            "/{id}",
            get(handlers::user::get_user).patch(handlers::user::update_profile),
        )
        .route("/{id}/posts", get(handlers::user::get_user_posts))
        .route("/{id}/liked-posts", get(handlers::user::get_liked_posts))
        .route("/{id}/blocks", post(handlers::block::block_user))
        .route(
            "/{id}/blocks/{blocked_id}",
            delete(handlers::block::unblock_user),
        )
}

fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::post::create_post))
        .route("/{id}", get(handlers::post::get_post))
        .route("/{id}/comments", post(handlers::post::comment_on_post))
        .route("/{id}/likes", post(handlers::like::like_post))
}

fn comment_routes() -> Router<AppState> {
    Router::new().route("/{id}/likes", post(handlers::like::like_comment))
}
