//! Post entity and repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::entity::{Entity, EntityBase};
use crate::domain::value_objects::{Counter, ImageUrl, PostContent, PostId, PostKind, UserId};
use crate::shared::error::{AppError, DomainError, DomainResult};

/// Maximum number of images attached to one post.
pub const MAX_POST_IMAGES: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct PostProps {
    pub author_id: UserId,
    pub content: PostContent,
    pub images: Vec<ImageUrl>,
    pub like_count: Counter,
    pub comment_count: Counter,
    pub is_private: bool,
    pub is_pinned: bool,
}

impl PostProps {
    /// Public, unpinned post with zeroed counters.
    pub fn new(author_id: UserId, content: PostContent, images: Vec<ImageUrl>) -> Self {
        Self {
            author_id,
            content,
            images,
            like_count: Counter::zero(),
            comment_count: Counter::zero(),
            is_private: false,
            is_pinned: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Post {
    base: EntityBase<PostKind>,
    props: PostProps,
}

impl Post {
    pub fn create(props: PostProps) -> DomainResult<Self> {
        ensure_image_limit(props.images.len())?;
        Ok(Self {
            base: EntityBase::new(None, None, None)?,
            props,
        })
    }

    pub fn restore(
        id: PostId,
        props: PostProps,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        ensure_image_limit(props.images.len())?;
        Ok(Self {
            base: EntityBase::new(Some(id), Some(created_at), Some(updated_at))?,
            props,
        })
    }

    pub fn author_id(&self) -> &UserId {
        &self.props.author_id
    }

    pub fn content(&self) -> &PostContent {
        &self.props.content
    }

    pub fn images(&self) -> &[ImageUrl] {
        &self.props.images
    }

    pub fn like_count(&self) -> Counter {
        self.props.like_count
    }

    pub fn comment_count(&self) -> Counter {
        self.props.comment_count
    }

    pub fn is_private(&self) -> bool {
        self.props.is_private
    }

    pub fn is_pinned(&self) -> bool {
        self.props.is_pinned
    }

    /// Leading part of the content with trailing whitespace removed.
    pub fn content_summary(&self, max_length: usize) -> DomainResult<String> {
        let summary = self.props.content.summary(max_length)?;
        Ok(summary.trim_end().to_string())
    }

    pub fn update_content(&mut self, content: PostContent) {
        self.props.content = content;
        self.base.touch();
    }

    pub fn add_image(&mut self, image: ImageUrl) -> DomainResult<()> {
        ensure_image_limit(self.props.images.len() + 1)?;
        self.props.images.push(image);
        self.base.touch();
        Ok(())
    }

    /// Remove every occurrence of `image`. Returns whether anything changed.
    pub fn remove_image(&mut self, image: &ImageUrl) -> bool {
        let before = self.props.images.len();
        self.props.images.retain(|existing| existing != image);
        let changed = self.props.images.len() != before;
        if changed {
            self.base.touch();
        }
        changed
    }

    pub fn increase_like_count(&mut self) {
        self.props.like_count = self.props.like_count.increment_by_one();
        self.base.touch();
    }

    pub fn decrease_like_count(&mut self) {
        self.props.like_count = self.props.like_count.decrement_by_one();
        self.base.touch();
    }

    pub fn increase_comment_count(&mut self) {
        self.props.comment_count = self.props.comment_count.increment_by_one();
        self.base.touch();
    }

    pub fn decrease_comment_count(&mut self) {
        self.props.comment_count = self.props.comment_count.decrement_by_one();
        self.base.touch();
    }

    pub fn pin(&mut self) {
        self.props.is_pinned = true;
        self.base.touch();
    }

    pub fn unpin(&mut self) {
        self.props.is_pinned = false;
        self.base.touch();
    }

    pub fn set_private(&mut self, is_private: bool) {
        self.props.is_private = is_private;
        self.base.touch();
    }
}

fn ensure_image_limit(count: usize) -> DomainResult<()> {
    if count > MAX_POST_IMAGES {
        return Err(DomainError::ExceededImageLimit {
            limit: MAX_POST_IMAGES,
        });
    }
    Ok(())
}

impl Entity for Post {
    type Kind = PostKind;

    fn base(&self) -> &EntityBase<PostKind> {
        &self.base
    }
}

/// Repository trait for Post data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, AppError>;

    /// Posts written by `author_id`, newest first.
    async fn find_by_author_id(&self, author_id: &UserId) -> Result<Vec<Post>, AppError>;

    /// Posts `user_id` has liked, most recently liked first.
    async fn find_liked_by_user_id(&self, user_id: &UserId) -> Result<Vec<Post>, AppError>;

    async fn save(&self, post: &Post) -> Result<(), AppError>;

    async fn update(&self, post: &Post) -> Result<(), AppError>;

    /// Adds one like in a single storage write and returns the new count.
    async fn increment_like_count(&self, id: &PostId) -> Result<i64, AppError>;

    /// Same as [`increment_like_count`](Self::increment_like_count) for comments.
    async fn increment_comment_count(&self, id: &PostId) -> Result<i64, AppError>;
}
