//! User Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{RegisterUserRequest, UpdateProfileRequest, UserQuery};
use crate::application::services::{PostDto, UserDto};
use crate::shared::error::AppError;
use crate::shared::validation::require_parameters;
use crate::startup::AppState;

use crate::presentation::http::extractors::JsonBody;

/// `POST /api/v1/users`
pub async fn register(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserDto>), AppError> {
    let user = state.users.register(body.into_dto()?).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// `GET /api/v1/users/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserDto>, AppError> {
    Ok(Json(state.users.get_user(&user_id).await?))
}

/// `GET /api/v1/users?alias=...`
pub async fn find_by_alias(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<UserDto>, AppError> {
    let alias = query.alias.as_deref();
    require_parameters(&[("alias", alias)])?;

    Ok(Json(
        state
            .users
            .get_user_by_alias(alias.unwrap_or_default())
            .await?,
    ))
}

/// `PATCH /api/v1/users/{id}`
pub async fn update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    JsonBody(body): JsonBody<UpdateProfileRequest>,
) -> Result<Json<UserDto>, AppError> {
    Ok(Json(state.users.update_profile(&user_id, body.into()).await?))
}

/// `GET /api/v1/users/{id}/posts`
pub async fn get_user_posts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<PostDto>>, AppError> {
    Ok(Json(state.posts.posts_by_author(&user_id).await?))
}

/// `GET /api/v1/users/{id}/liked-posts`
pub async fn get_liked_posts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<PostDto>>, AppError> {
    Ok(Json(state.posts.liked_posts(&user_id).await?))
}
