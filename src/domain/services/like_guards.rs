//! One-like-per-user guards for posts and comments.

use std::sync::Arc;

use crate::domain::entities::{CommentLikeRepository, PostLikeRepository};
use crate::domain::value_objects::{CommentId, PostId, UserId};
use crate::shared::error::{AppError, DomainError};

pub struct EnsureOnePostLikePerUser<R: PostLikeRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: PostLikeRepository + ?Sized> EnsureOnePostLikePerUser<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn assert_user_has_not_liked_post(
        &self,
        user_id: &UserId,
        post_id: &PostId,
    ) -> Result<(), AppError> {
        if self
            .repository
            .find_by_user_and_post(user_id, post_id)
            .await?
            .is_some()
        {
            tracing::warn!(user_id = %user_id, post_id = %post_id, "Post already liked");
            return Err(DomainError::UserAlreadyLikedPost.into());
        }
        Ok(())
    }
}

pub struct EnsureOneCommentLikePerUser<R: CommentLikeRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CommentLikeRepository + ?Sized> EnsureOneCommentLikePerUser<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn assert_user_has_not_liked_comment(
        &self,
        user_id: &UserId,
        comment_id: &CommentId,
    ) -> Result<(), AppError> {
        if self
            .repository
            .find_by_user_and_comment(user_id, comment_id)
            .await?
            .is_some()
        {
            tracing::warn!(user_id = %user_id, comment_id = %comment_id, "Comment already liked");
            return Err(DomainError::UserAlreadyLikedComment.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        CommentLike, MockCommentLikeRepository, MockPostLikeRepository, PostLike,
    };
    use crate::shared::error::ErrorCode;

    #[tokio::test]
    async fn test_second_post_like_fails_only_for_same_pair() {
        let user = UserId::generate();
        let liked_post = PostId::generate();
        let other_post = PostId::generate();

        let mut repo = MockPostLikeRepository::new();
        let (u, p) = (user.clone(), liked_post.clone());
        repo.expect_find_by_user_and_post().returning(move |user_id, post_id| {
            if user_id == &u && post_id == &p {
                Ok(Some(PostLike::create(u.clone(), p.clone()).unwrap()))
            } else {
                Ok(None)
            }
        });
        let guard = EnsureOnePostLikePerUser::new(Arc::new(repo));

        let err = guard
            .assert_user_has_not_liked_post(&user, &liked_post)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::UserAlreadyLikedPost);

        assert!(guard
            .assert_user_has_not_liked_post(&user, &other_post)
            .await
            .is_ok());
        assert!(guard
            .assert_user_has_not_liked_post(&UserId::generate(), &liked_post)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_comment_like_guard() {
        let user = UserId::generate();
        let comment = CommentId::generate();

        let mut repo = MockCommentLikeRepository::new();
        let existing = CommentLike::create(user.clone(), comment.clone()).unwrap();
        repo.expect_find_by_user_and_comment()
            .times(1)
            .returning(move |_, _| Ok(Some(existing.clone())));
        let guard = EnsureOneCommentLikePerUser::new(Arc::new(repo));

        let err = guard
            .assert_user_has_not_liked_comment(&user, &comment)
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Domain(DomainError::UserAlreadyLikedComment));
    }
}
