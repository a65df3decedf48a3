//! Block Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::BlockUserRequest;
use crate::application::services::BlockedUserDto;
use crate::shared::error::AppError;
use crate::startup::AppState;

use crate::presentation::http::extractors::JsonBody;

/// `POST /api/v1/users/{id}/blocks`
pub async fn block_user(
    State(state): State<AppState>,
    Path(blocker_id): Path<String>,
    JsonBody(body): JsonBody<BlockUserRequest>,
) -> Result<(StatusCode, Json<BlockedUserDto>), AppError> {
    let block = state
        .blocks
        .block_user(&blocker_id, body.blocked_id()?)
        .await?;
    Ok((StatusCode::CREATED, Json(block)))
}

/// `DELETE /api/v1/users/{id}/blocks/{blocked_id}`
pub async fn unblock_user(
    State(state): State<AppState>,
    Path((blocker_id, blocked_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    state.blocks.unblock_user(&blocker_id, &blocked_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
