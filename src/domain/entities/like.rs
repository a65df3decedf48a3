//! Likes on posts and comments.
//!
//! A user likes a given post or comment at most once. The pair carries a
//! unique index in storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::entity::{Entity, EntityBase};
use crate::domain::value_objects::{CommentId, LikeId, LikeKind, PostId, UserId};
use crate::shared::error::{AppError, DomainResult};

#[derive(Debug, Clone)]
pub struct PostLike {
    base: EntityBase<LikeKind>,
    user_id: UserId,
    post_id: PostId,
}

impl PostLike {
    pub fn create(user_id: UserId, post_id: PostId) -> DomainResult<Self> {
        Ok(Self {
            base: EntityBase::new(None, None, None)?,
            user_id,
            post_id,
        })
    }

    pub fn restore(
        id: LikeId,
        user_id: UserId,
        post_id: PostId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            base: EntityBase::new(Some(id), Some(created_at), Some(updated_at))?,
            user_id,
            post_id,
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn post_id(&self) -> &PostId {
        &self.post_id
    }
}

impl Entity for PostLike {
    type Kind = LikeKind;

    fn base(&self) -> &EntityBase<LikeKind> {
        &self.base
    }
}

#[derive(Debug, Clone)]
pub struct CommentLike {
    base: EntityBase<LikeKind>,
    user_id: UserId,
    comment_id: CommentId,
}

impl CommentLike {
    pub fn create(user_id: UserId, comment_id: CommentId) -> DomainResult<Self> {
        Ok(Self {
            base: EntityBase::new(None, None, None)?,
            user_id,
            comment_id,
        })
    }

    pub fn restore(
        id: LikeId,
        user_id: UserId,
        comment_id: CommentId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            base: EntityBase::new(Some(id), Some(created_at), Some(updated_at))?,
            user_id,
            comment_id,
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn comment_id(&self) -> &CommentId {
        &self.comment_id
    }
}

impl Entity for CommentLike {
    type Kind = LikeKind;

    fn base(&self) -> &EntityBase<LikeKind> {
        &self.base
    }
}

/// Repository trait for post likes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostLikeRepository: Send + Sync {
    async fn find_by_user_and_post(
        &self,
        user_id: &UserId,
        post_id: &PostId,
    ) -> Result<Option<PostLike>, AppError>;

    /// Fails with `UserAlreadyLikedPost` when the pair already exists.
    async fn save(&self, like: &PostLike) -> Result<(), AppError>;
}

/// Repository trait for comment likes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentLikeRepository: Send + Sync {
    async fn find_by_user_and_comment(
        &self,
        user_id: &UserId,
        comment_id: &CommentId,
    ) -> Result<Option<CommentLike>, AppError>;

    /// Fails with `UserAlreadyLikedComment` when the pair already exists.
    async fn save(&self, like: &CommentLike) -> Result<(), AppError>;
}
