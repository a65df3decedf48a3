//! Post Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{
    Counter, Entity, ImageUrl, Post, PostContent, PostId, PostProps, PostRepository, UserId,
};
use crate::infrastructure::database::{corrupt_row, id_of, missing_row, uuid_of};
use crate::shared::error::AppError;

const SELECT_POST: &str = r#"
    SELECT id, author_id, content, images, like_count, comment_count,
           is_private, is_pinned, created_at, updated_at
    FROM posts
"#;

#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    author_id: Uuid,
    content: String,
    images: Vec<String>,
    like_count: i64,
    comment_count: i64,
    is_private: bool,
    is_pinned: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Result<Post, AppError> {
        let images = self
            .images
            .iter()
            .map(|url| ImageUrl::create(url))
            .collect::<Result<Vec<_>, _>>()
            .map_err(corrupt_row)?;

        let props = PostProps {
            author_id: id_of(self.author_id)?,
            content: PostContent::create(&self.content).map_err(corrupt_row)?,
            images,
            like_count: Counter::create(self.like_count).map_err(corrupt_row)?,
            comment_count: Counter::create(self.comment_count).map_err(corrupt_row)?,
            is_private: self.is_private,
            is_pinned: self.is_pinned,
        };

        Post::restore(id_of(self.id)?, props, self.created_at, self.updated_at).map_err(corrupt_row)
    }
}

fn image_values(post: &Post) -> Vec<String> {
    post.images().iter().map(|url| url.value().to_string()).collect()
}

/// PostgreSQL post repository implementation.
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, AppError> {
        let row = sqlx::query_as::<_, PostRow>(&format!("{SELECT_POST} WHERE id = $1"))
            .bind(uuid_of(id)?)
            .fetch_optional(&self.pool)
            .await?;

        row.map(PostRow::into_post).transpose()
    }

    async fn find_by_author_id(&self, author_id: &UserId) -> Result<Vec<Post>, AppError> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "{SELECT_POST} WHERE author_id = $1 ORDER BY created_at DESC"
        ))
        .bind(uuid_of(author_id)?)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PostRow::into_post).collect()
    }

    async fn find_liked_by_user_id(&self, user_id: &UserId) -> Result<Vec<Post>, AppError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT p.id, p.author_id, p.content, p.images, p.like_count, p.comment_count,
                   p.is_private, p.is_pinned, p.created_at, p.updated_at
            FROM posts p
            JOIN post_likes l ON l.post_id = p.id
            WHERE l.user_id = $1
            ORDER BY l.created_at DESC
            "#,
        )
        .bind(uuid_of(user_id)?)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PostRow::into_post).collect()
    }

    async fn save(&self, post: &Post) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, author_id, content, images, like_count, comment_count,
                               is_private, is_pinned, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(uuid_of(post.id())?)
        .bind(uuid_of(post.author_id())?)
        .bind(post.content().value())
        .bind(image_values(post))
        .bind(post.like_count().value())
        .bind(post.comment_count().value())
        .bind(post.is_private())
        .bind(post.is_pinned())
        .bind(post.created_at())
        .bind(post.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, post: &Post) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET content = $2, images = $3, like_count = $4, comment_count = $5,
                is_private = $6, is_pinned = $7, updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(uuid_of(post.id())?)
        .bind(post.content().value())
        .bind(image_values(post))
        .bind(post.like_count().value())
        .bind(post.comment_count().value())
        .bind(post.is_private())
        .bind(post.is_pinned())
        .bind(post.updated_at())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(missing_row("post", post.id()));
        }
        Ok(())
    }

    async fn increment_like_count(&self, id: &PostId) -> Result<i64, AppError> {
        let count: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE posts
            SET like_count = like_count + 1, updated_at = GREATEST(updated_at, $2)
            WHERE id = $1
            RETURNING like_count
            "#,
        )
        .bind(uuid_of(id)?)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        count.ok_or_else(|| missing_row("post", id))
    }

    async fn increment_comment_count(&self, id: &PostId) -> Result<i64, AppError> {
        let count: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE posts
            SET comment_count = comment_count + 1, updated_at = GREATEST(updated_at, $2)
            WHERE id = $1
            RETURNING comment_count
            "#,
        )
        .bind(uuid_of(id)?)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        count.ok_or_else(|| missing_row("post", id))
    }
}
