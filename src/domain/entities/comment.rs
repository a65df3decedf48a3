//! Comment entity and repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::entity::{Entity, EntityBase};
use crate::domain::value_objects::{CommentContent, CommentId, CommentKind, Counter, PostId, UserId};
use crate::shared::error::{AppError, DomainResult};

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq)]
pub struct CommentProps {
    pub author_id: UserId,
    pub post_id: PostId,
    pub content: CommentContent,
    pub reply_ids: Vec<CommentId>,
    pub like_count: Counter,
}

impl CommentProps {
    pub fn new(author_id: UserId, post_id: PostId, content: CommentContent) -> Self {
        Self {
            author_id,
            post_id,
            content,
            reply_ids: Vec::new(),
            like_count: Counter::zero(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    base: EntityBase<CommentKind>,
    props: CommentProps,
}

impl Comment {
    pub fn create(props: CommentProps) -> DomainResult<Self> {
        Ok(Self {
            base: EntityBase::new(None, None, None)?,
            props,
        })
    }

    pub fn restore(
        id: CommentId,
        props: CommentProps,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            base: EntityBase::new(Some(id), Some(created_at), Some(updated_at))?,
            props,
        })
    }

    pub fn author_id(&self) -> &UserId {
        &self.props.author_id
    }

    pub fn post_id(&self) -> &PostId {
        &self.props.post_id
    }

    pub fn content(&self) -> &CommentContent {
        &self.props.content
    }

    pub fn reply_ids(&self) -> &[CommentId] {
        &self.props.reply_ids
    }

    pub fn like_count(&self) -> Counter {
        self.props.like_count
    }

    /// Summary that fits in `max_length` characters including the trailing
    /// ellipsis.
    pub fn content_summary(&self, max_length: usize) -> DomainResult<String> {
        // Validate the requested length before shortening it for the ellipsis.
        self.props.content.summary(max_length)?;
        let summary = self
            .props
            .content
            .value()
            .chars()
            .take(max_length - ELLIPSIS.len())
            .collect::<String>();
        Ok(format!("{}{ELLIPSIS}", summary.trim_end()))
    }

    pub fn update_content(&mut self, content: CommentContent) {
        self.props.content = content;
        self.base.touch();
    }

    pub fn add_reply_id(&mut self, reply_id: CommentId) {
        if !self.props.reply_ids.contains(&reply_id) {
            self.props.reply_ids.push(reply_id);
            self.base.touch();
        }
    }

    pub fn remove_reply_id(&mut self, reply_id: &CommentId) {
        let before = self.props.reply_ids.len();
        self.props.reply_ids.retain(|id| id != reply_id);
        if self.props.reply_ids.len() != before {
            self.base.touch();
        }
    }

    pub fn increase_like_count(&mut self) {
        self.props.like_count = self.props.like_count.increment_by_one();
        self.base.touch();
    }

    pub fn decrease_like_count(&mut self) {
        self.props.like_count = self.props.like_count.decrement_by_one();
        self.base.touch();
    }
}

impl Entity for Comment {
    type Kind = CommentKind;

    fn base(&self) -> &EntityBase<CommentKind> {
        &self.base
    }
}

/// Repository trait for Comment data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, AppError>;

    async fn save(&self, comment: &Comment) -> Result<(), AppError>;

    async fn update(&self, comment: &Comment) -> Result<(), AppError>;

    /// Adds one like in a single storage write and returns the new count.
    async fn increment_like_count(&self, id: &CommentId) -> Result<i64, AppError>;
}
