//! Comment Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{
    Comment, CommentContent, CommentId, CommentProps, CommentRepository, Counter, Entity,
};
use crate::infrastructure::database::{corrupt_row, id_of, missing_row, uuid_of};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    author_id: Uuid,
    post_id: Uuid,
    content: String,
    reply_ids: Vec<Uuid>,
    like_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Result<Comment, AppError> {
        let props = CommentProps {
            author_id: id_of(self.author_id)?,
            post_id: id_of(self.post_id)?,
            content: CommentContent::create(&self.content).map_err(corrupt_row)?,
            reply_ids: self
                .reply_ids
                .into_iter()
                .map(id_of)
                .collect::<Result<Vec<_>, _>>()?,
            like_count: Counter::create(self.like_count).map_err(corrupt_row)?,
        };

        Comment::restore(id_of(self.id)?, props, self.created_at, self.updated_at)
            .map_err(corrupt_row)
    }
}

fn reply_uuids(comment: &Comment) -> Result<Vec<Uuid>, AppError> {
    comment.reply_ids().iter().map(uuid_of).collect()
}

/// PostgreSQL comment repository implementation.
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, author_id, post_id, content, reply_ids, like_count, created_at, updated_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(uuid_of(id)?)
        .fetch_optional(&self.pool)
        .await?;

        row.map(CommentRow::into_comment).transpose()
    }

    async fn save(&self, comment: &Comment) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, author_id, post_id, content, reply_ids, like_count,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(uuid_of(comment.id())?)
        .bind(uuid_of(comment.author_id())?)
        .bind(uuid_of(comment.post_id())?)
        .bind(comment.content().value())
        .bind(reply_uuids(comment)?)
        .bind(comment.like_count().value())
        .bind(comment.created_at())
        .bind(comment.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, comment: &Comment) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE comments
            SET content = $2, reply_ids = $3, like_count = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(uuid_of(comment.id())?)
        .bind(comment.content().value())
        .bind(reply_uuids(comment)?)
        .bind(comment.like_count().value())
        .bind(comment.updated_at())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(missing_row("comment", comment.id()));
        }
        Ok(())
    }

    async fn increment_like_count(&self, id: &CommentId) -> Result<i64, AppError> {
        let count: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE comments
            SET like_count = like_count + 1, updated_at = GREATEST(updated_at, $2)
            WHERE id = $1
            RETURNING like_count
            "#,
        )
        .bind(uuid_of(id)?)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        count.ok_or_else(|| missing_row("comment", id))
    }
}
