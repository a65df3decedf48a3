//! Like Service
//!
//! Likes on posts and comments. The one-like guard gives the friendly
//! rejection; the repository's unique pair constraint decides races. Counts
//! are incremented in storage so concurrent likes are all counted.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::services::{EnsureOneCommentLikePerUser, EnsureOnePostLikePerUser};
use crate::domain::{
    CommentId, CommentLike, CommentLikeRepository, CommentRepository, Entity, PostId, PostLike,
    PostLikeRepository, PostRepository, UserId, UserRepository,
};
use crate::shared::error::{AppError, ApplicationError};

/// Like service trait
#[async_trait]
pub trait LikeService: Send + Sync {
    async fn like_post(&self, user_id: &str, post_id: &str) -> Result<LikeDto, AppError>;

    async fn like_comment(&self, user_id: &str, comment_id: &str) -> Result<LikeDto, AppError>;
}

/// Result of a like: the new like and the target's updated count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LikeDto {
    pub id: String,
    pub user_id: String,
    pub target_id: String,
    pub like_count: i64,
}

/// Repositories a [`LikeServiceImpl`] works with.
pub struct LikeRepositories<U, P, C, PL, CL> {
    pub users: Arc<U>,
    pub posts: Arc<P>,
    pub comments: Arc<C>,
    pub post_likes: Arc<PL>,
    pub comment_likes: Arc<CL>,
}

/// LikeService implementation
pub struct LikeServiceImpl<U, P, C, PL, CL>
where
    U: UserRepository,
    P: PostRepository,
    C: CommentRepository,
    PL: PostLikeRepository,
    CL: CommentLikeRepository,
{
    repos: LikeRepositories<U, P, C, PL, CL>,
    post_like_guard: EnsureOnePostLikePerUser<PL>,
    comment_like_guard: EnsureOneCommentLikePerUser<CL>,
}

impl<U, P, C, PL, CL> LikeServiceImpl<U, P, C, PL, CL>
where
    U: UserRepository,
    P: PostRepository,
    C: CommentRepository,
    PL: PostLikeRepository,
    CL: CommentLikeRepository,
{
    pub fn new(repos: LikeRepositories<U, P, C, PL, CL>) -> Self {
        Self {
            post_like_guard: EnsureOnePostLikePerUser::new(Arc::clone(&repos.post_likes)),
            comment_like_guard: EnsureOneCommentLikePerUser::new(Arc::clone(&repos.comment_likes)),
            repos,
        }
    }

    async fn ensure_user_exists(&self, user_id: &UserId) -> Result<(), AppError> {
        match self.repos.users.find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::not_found(format!("User not found by id: {user_id}")).into()),
        }
    }
}

#[async_trait]
impl<U, P, C, PL, CL> LikeService for LikeServiceImpl<U, P, C, PL, CL>
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    C: CommentRepository + 'static,
    PL: PostLikeRepository + 'static,
    CL: CommentLikeRepository + 'static,
{
    async fn like_post(&self, user_id: &str, post_id: &str) -> Result<LikeDto, AppError> {
        let user_id = UserId::create(user_id)?;
        let post_id = PostId::create(post_id)?;

        let (_, post) = futures::try_join!(
            self.ensure_user_exists(&user_id),
            self.repos.posts.find_by_id(&post_id)
        )?;
        post.ok_or_else(|| ApplicationError::not_found(format!("Post not found by id: {post_id}")))?;

        self.post_like_guard
            .assert_user_has_not_liked_post(&user_id, &post_id)
            .await?;

        let like = PostLike::create(user_id, post_id)?;
        self.repos.post_likes.save(&like).await?;
        let like_count = self.repos.posts.increment_like_count(like.post_id()).await?;

        tracing::info!(user_id = %like.user_id(), post_id = %like.post_id(), "Post liked");

        Ok(LikeDto {
            id: like.id().to_string(),
            user_id: like.user_id().to_string(),
            target_id: like.post_id().to_string(),
            like_count,
        })
    }

    async fn like_comment(&self, user_id: &str, comment_id: &str) -> Result<LikeDto, AppError> {
        let user_id = UserId::create(user_id)?;
        let comment_id = CommentId::create(comment_id)?;

        let (_, comment) = futures::try_join!(
            self.ensure_user_exists(&user_id),
            self.repos.comments.find_by_id(&comment_id)
        )?;
        comment.ok_or_else(|| {
            ApplicationError::not_found(format!("Comment not found by id: {comment_id}"))
        })?;

        self.comment_like_guard
            .assert_user_has_not_liked_comment(&user_id, &comment_id)
            .await?;

        let like = CommentLike::create(user_id, comment_id)?;
        self.repos.comment_likes.save(&like).await?;
        let like_count = self.repos.comments.increment_like_count(like.comment_id()).await?;

        tracing::info!(user_id = %like.user_id(), comment_id = %like.comment_id(), "Comment liked");

        Ok(LikeDto {
            id: like.id().to_string(),
            user_id: like.user_id().to_string(),
            target_id: like.comment_id().to_string(),
            like_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Alias, Email, MockCommentLikeRepository, MockCommentRepository, MockPostLikeRepository,
        MockPostRepository, MockUserRepository, Name, Password, Post, PostContent, PostProps,
        User, UserProps,
    };
    use crate::shared::error::{DomainError, ErrorCode};

    type Service = LikeServiceImpl<
        MockUserRepository,
        MockPostRepository,
        MockCommentRepository,
        MockPostLikeRepository,
        MockCommentLikeRepository,
    >;

    fn user() -> User {
        User::create(UserProps {
            name: Name::create("Liker").unwrap(),
            email: Email::create("liker@example.com").unwrap(),
            alias: Alias::create("liker").unwrap(),
            password: Password::from_hash("hash"),
        })
        .unwrap()
    }

    fn post() -> Post {
        Post::create(PostProps::new(
            UserId::generate(),
            PostContent::create("likeable").unwrap(),
            Vec::new(),
        ))
        .unwrap()
    }

    fn service(posts: MockPostRepository, post_likes: MockPostLikeRepository) -> Service {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(Some(user())));

        LikeServiceImpl::new(LikeRepositories {
            users: Arc::new(users),
            posts: Arc::new(posts),
            comments: Arc::new(MockCommentRepository::new()),
            post_likes: Arc::new(post_likes),
            comment_likes: Arc::new(MockCommentLikeRepository::new()),
        })
    }

    #[tokio::test]
    async fn test_like_post_increments_count() {
        let mut posts = MockPostRepository::new();
        posts.expect_find_by_id().returning(|_| Ok(Some(post())));
        posts.expect_update().never();
        posts.expect_increment_like_count().times(1).returning(|_| Ok(1));
        let mut likes = MockPostLikeRepository::new();
        likes.expect_find_by_user_and_post().returning(|_, _| Ok(None));
        likes.expect_save().times(1).returning(|_| Ok(()));

        let dto = service(posts, likes)
            .like_post(UserId::generate().value(), PostId::generate().value())
            .await
            .unwrap();

        assert_eq!(dto.like_count, 1);
    }

    #[tokio::test]
    async fn test_lost_race_does_not_touch_count() {
        let mut posts = MockPostRepository::new();
        posts.expect_find_by_id().returning(|_| Ok(Some(post())));
        posts.expect_increment_like_count().never();
        let mut likes = MockPostLikeRepository::new();
        likes.expect_find_by_user_and_post().returning(|_, _| Ok(None));
        likes.expect_save()
            .returning(|_| Err(DomainError::UserAlreadyLikedPost.into()));

        let err = service(posts, likes)
            .like_post(UserId::generate().value(), PostId::generate().value())
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::UserAlreadyLikedPost);
    }

    #[tokio::test]
    async fn test_like_missing_post() {
        let mut posts = MockPostRepository::new();
        posts.expect_find_by_id().returning(|_| Ok(None));

        let err = service(posts, MockPostLikeRepository::new())
            .like_post(UserId::generate().value(), PostId::generate().value())
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_like_reports_stored_count() {
        let mut posts = MockPostRepository::new();
        posts.expect_find_by_id().returning(|_| Ok(Some(post())));
        // Another like landed between the read and the increment.
        posts.expect_increment_like_count().times(1).returning(|_| Ok(2));
        let mut likes = MockPostLikeRepository::new();
        likes.expect_find_by_user_and_post().returning(|_, _| Ok(None));
        likes.expect_save().times(1).returning(|_| Ok(()));

        let dto = service(posts, likes)
            .like_post(UserId::generate().value(), PostId::generate().value())
            .await
            .unwrap();

        assert_eq!(dto.like_count, 2);
    }
}
