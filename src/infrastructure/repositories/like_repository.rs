//! Like Repository Implementations
//!
//! The `(user_id, post_id)` and `(user_id, comment_id)` unique indexes are
//! reported as `UserAlreadyLikedPost` / `UserAlreadyLikedComment`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{
    CommentId, CommentLike, CommentLikeRepository, Entity, PostId, PostLike, PostLikeRepository,
    UserId,
};
use crate::infrastructure::database::{
    corrupt_row, id_of, unique_violation, uuid_of, COMMENT_LIKES_USER_COMMENT_KEY,
    POST_LIKES_USER_POST_KEY,
};
use crate::shared::error::{AppError, DomainError};

/// Row shape shared by both like tables.
#[derive(Debug, sqlx::FromRow)]
struct LikeRow {
    id: Uuid,
    user_id: Uuid,
    target_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// PostgreSQL post like repository implementation.
#[derive(Clone)]
pub struct PgPostLikeRepository {
    pool: PgPool,
}

impl PgPostLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostLikeRepository for PgPostLikeRepository {
    async fn find_by_user_and_post(
        &self,
        user_id: &UserId,
        post_id: &PostId,
    ) -> Result<Option<PostLike>, AppError> {
        let row = sqlx::query_as::<_, LikeRow>(
            r#"
            SELECT id, user_id, post_id AS target_id, created_at, updated_at
            FROM post_likes
            WHERE user_id = $1 AND post_id = $2
            "#,
        )
        .bind(uuid_of(user_id)?)
        .bind(uuid_of(post_id)?)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| {
            PostLike::restore(
                id_of(r.id)?,
                id_of(r.user_id)?,
                id_of(r.target_id)?,
                r.created_at,
                r.updated_at,
            )
            .map_err(corrupt_row)
        })
        .transpose()
    }

    async fn save(&self, like: &PostLike) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO post_likes (id, user_id, post_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(uuid_of(like.id())?)
        .bind(uuid_of(like.user_id())?)
        .bind(uuid_of(like.post_id())?)
        .bind(like.created_at())
        .bind(like.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| match unique_violation(&e) {
            Some(POST_LIKES_USER_POST_KEY) => AppError::from(DomainError::UserAlreadyLikedPost),
            _ => AppError::from(e),
        })?;

        Ok(())
    }
}

/// PostgreSQL comment like repository implementation.
#[derive(Clone)]
pub struct PgCommentLikeRepository {
    pool: PgPool,
}

impl PgCommentLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentLikeRepository for PgCommentLikeRepository {
    async fn find_by_user_and_comment(
        &self,
        user_id: &UserId,
        comment_id: &CommentId,
    ) -> Result<Option<CommentLike>, AppError> {
        let row = sqlx::query_as::<_, LikeRow>(
            r#"
            SELECT id, user_id, comment_id AS target_id, created_at, updated_at
            FROM comment_likes
            WHERE user_id = $1 AND comment_id = $2
            "#,
        )
        .bind(uuid_of(user_id)?)
        .bind(uuid_of(comment_id)?)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| {
            CommentLike::restore(
                id_of(r.id)?,
                id_of(r.user_id)?,
                id_of(r.target_id)?,
                r.created_at,
                r.updated_at,
            )
            .map_err(corrupt_row)
        })
        .transpose()
    }

    async fn save(&self, like: &CommentLike) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO comment_likes (id, user_id, comment_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(uuid_of(like.id())?)
        .bind(uuid_of(like.user_id())?)
        .bind(uuid_of(like.comment_id())?)
        .bind(like.created_at())
        .bind(like.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| match unique_violation(&e) {
            Some(COMMENT_LIKES_USER_COMMENT_KEY) => AppError::from(DomainError::UserAlreadyLikedComment),
            _ => AppError::from(e),
        })?;

        Ok(())
    }
}
