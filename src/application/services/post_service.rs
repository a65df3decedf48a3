//! Post Service
//!
//! Post creation and lookup, liked-post listing, plus commenting on a post.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::services::PostDomainService;
use crate::domain::{
    Comment, CommentContent, CommentProps, CommentRepository, Entity, ImageUrl, Post, PostContent,
    PostId, PostProps, PostRepository, UserId, UserRepository, MAX_POST_IMAGES,
};
use crate::shared::error::{AppError, ApplicationError, DomainError};

/// Post service trait
#[async_trait]
pub trait PostService: Send + Sync {
    async fn create_post(&self, dto: CreatePostDto) -> Result<PostDto, AppError>;

    async fn get_post(&self, post_id: &str) -> Result<PostDto, AppError>;

    /// Posts of one author, newest first
    async fn posts_by_author(&self, author_id: &str) -> Result<Vec<PostDto>, AppError>;

    /// Posts the user has liked, most recently liked first
    async fn liked_posts(&self, user_id: &str) -> Result<Vec<PostDto>, AppError>;

    async fn comment_on_post(&self, post_id: &str, dto: CreateCommentDto) -> Result<CommentDto, AppError>;
}

/// Post data transfer object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDto {
    pub id: String,
    pub author_id: String,
    pub content: String,
    pub images: Vec<String>,
    pub like_count: i64,
    pub comment_count: i64,
    pub is_private: bool,
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Post> for PostDto {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id().to_string(),
            author_id: post.author_id().to_string(),
            content: post.content().to_string(),
            images: post.images().iter().map(ToString::to_string).collect(),
            like_count: post.like_count().value(),
            comment_count: post.comment_count().value(),
            is_private: post.is_private(),
            is_pinned: post.is_pinned(),
            created_at: post.created_at(),
            updated_at: post.updated_at(),
        }
    }
}

/// Comment data transfer object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentDto {
    pub id: String,
    pub author_id: String,
    pub post_id: String,
    pub content: String,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentDto {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id().to_string(),
            author_id: comment.author_id().to_string(),
            post_id: comment.post_id().to_string(),
            content: comment.content().to_string(),
            like_count: comment.like_count().value(),
            created_at: comment.created_at(),
        }
    }
}

/// Create post input
#[derive(Debug, Clone)]
pub struct CreatePostDto {
    pub author_id: String,
    pub content: String,
    pub images: Vec<String>,
}

/// Create comment input
#[derive(Debug, Clone)]
pub struct CreateCommentDto {
    pub author_id: String,
    pub content: String,
}

/// PostService implementation
pub struct PostServiceImpl<U, P, C>
where
    U: UserRepository,
    P: PostRepository,
    C: CommentRepository,
{
    user_repo: Arc<U>,
    post_repo: Arc<P>,
    comment_repo: Arc<C>,
}

impl<U, P, C> PostServiceImpl<U, P, C>
where
    U: UserRepository,
    P: PostRepository,
    C: CommentRepository,
{
    pub fn new(user_repo: Arc<U>, post_repo: Arc<P>, comment_repo: Arc<C>) -> Self {
        Self {
            user_repo,
            post_repo,
            comment_repo,
        }
    }

    async fn ensure_user_exists(&self, user_id: &UserId) -> Result<(), AppError> {
        match self.user_repo.find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::not_found(format!("User not found by id: {user_id}")).into()),
        }
    }

    async fn find_post(&self, post_id: &PostId) -> Result<Post, AppError> {
        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("Post not found by id: {post_id}")).into())
    }
}

fn image_urls(images: &[String]) -> Result<Vec<ImageUrl>, DomainError> {
    if images.len() > MAX_POST_IMAGES {
        return Err(DomainError::ExceededImageLimit {
            limit: MAX_POST_IMAGES,
        });
    }
    images.iter().map(|url| ImageUrl::create(url)).collect()
}

#[async_trait]
impl<U, P, C> PostService for PostServiceImpl<U, P, C>
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    C: CommentRepository + 'static,
{
    async fn create_post(&self, dto: CreatePostDto) -> Result<PostDto, AppError> {
        let author_id = UserId::create(&dto.author_id)?;
        let content = PostContent::create(&dto.content)?;
        let images = image_urls(&dto.images)?;

        self.ensure_user_exists(&author_id).await?;

        let post = Post::create(PostProps::new(author_id, content, images))?;
        self.post_repo.save(&post).await?;

        tracing::info!(post_id = %post.id(), author_id = %post.author_id(), "Post created");

        Ok(PostDto::from(&post))
    }

    async fn get_post(&self, post_id: &str) -> Result<PostDto, AppError> {
        let post_id = PostId::create(post_id)?;
        let post = self.find_post(&post_id).await?;

        Ok(PostDto::from(&post))
    }

    async fn posts_by_author(&self, author_id: &str) -> Result<Vec<PostDto>, AppError> {
        let author_id = UserId::create(author_id)?;
        self.ensure_user_exists(&author_id).await?;

        let posts = self.post_repo.find_by_author_id(&author_id).await?;

        Ok(PostDomainService::sort_by_created_at(&posts)
            .into_iter()
            .map(PostDto::from)
            .collect())
    }

    async fn liked_posts(&self, user_id: &str) -> Result<Vec<PostDto>, AppError> {
        let user_id = UserId::create(user_id)?;
        self.ensure_user_exists(&user_id).await?;

        let posts = self.post_repo.find_liked_by_user_id(&user_id).await?;

        Ok(posts.iter().map(PostDto::from).collect())
    }

    async fn comment_on_post(&self, post_id: &str, dto: CreateCommentDto) -> Result<CommentDto, AppError> {
        let post_id = PostId::create(post_id)?;
        let author_id = UserId::create(&dto.author_id)?;
        let content = CommentContent::create(&dto.content)?;

        futures::try_join!(
            self.ensure_user_exists(&author_id),
            self.find_post(&post_id)
        )?;

        let comment = Comment::create(CommentProps::new(author_id, post_id, content))?;
        self.comment_repo.save(&comment).await?;
        self.post_repo.increment_comment_count(comment.post_id()).await?;

        tracing::info!(comment_id = %comment.id(), post_id = %comment.post_id(), "Comment created");

        Ok(CommentDto::from(&comment))
    }
}
