//! Post Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{CreateCommentRequest, CreatePostRequest};
use crate::application::services::{CommentDto, PostDto};
use crate::shared::error::AppError;
use crate::startup::AppState;

use crate::presentation::http::extractors::JsonBody;

/// `POST /api/v1/posts`
pub async fn create_post(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostDto>), AppError> {
    let post = state.posts.create_post(body.into_dto()?).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// `GET /api/v1/posts/{id}`
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<PostDto>, AppError> {
    Ok(Json(state.posts.get_post(&post_id).await?))
}

/// `POST /api/v1/posts/{id}/comments`
pub async fn comment_on_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    JsonBody(body): JsonBody<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentDto>), AppError> {
    let comment = state.posts.comment_on_post(&post_id, body.into_dto()?).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}
