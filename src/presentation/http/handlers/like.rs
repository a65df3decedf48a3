//! Like Handlers
//!
//! The liking user is named in the body as `user_id`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::ActorRequest;
use crate::application::services::LikeDto;
use crate::shared::error::AppError;
use crate::startup::AppState;

use crate::presentation::http::extractors::JsonBody;

/// `POST /api/v1/posts/{id}/likes`
pub async fn like_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    JsonBody(body): JsonBody<ActorRequest>,
) -> Result<(StatusCode, Json<LikeDto>), AppError> {
    let like = state.likes.like_post(body.user_id()?, &post_id).await?;
    Ok((StatusCode::CREATED, Json(like)))
}

/// `POST /api/v1/comments/{id}/likes`
pub async fn like_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    JsonBody(body): JsonBody<ActorRequest>,
) -> Result<(StatusCode, Json<LikeDto>), AppError> {
    let like = state.likes.like_comment(body.user_id()?, &comment_id).await?;
    Ok((StatusCode::CREATED, Json(like)))
}
