//! Block relationship between two users.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::entity::{Entity, EntityBase};
use crate::domain::value_objects::{BlockedUserId, BlockedUserKind, UserId};
use crate::shared::error::{AppError, DomainError, DomainResult};

/// `blocker_id` has blocked `blocked_id`. The pair is ordered.
#[derive(Debug, Clone)]
pub struct BlockedUser {
    base: EntityBase<BlockedUserKind>,
    blocker_id: UserId,
    blocked_id: UserId,
}

impl BlockedUser {
    pub fn create(blocker_id: UserId, blocked_id: UserId) -> DomainResult<Self> {
        Self::build(None, blocker_id, blocked_id, None, None)
    }

    pub fn restore(
        id: BlockedUserId,
        blocker_id: UserId,
        blocked_id: UserId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Self::build(Some(id), blocker_id, blocked_id, Some(created_at), Some(updated_at))
    }

    fn build(
        id: Option<BlockedUserId>,
        blocker_id: UserId,
        blocked_id: UserId,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        if blocker_id == blocked_id {
            return Err(DomainError::CannotBlockYourself);
        }

        Ok(Self {
            base: EntityBase::new(id, created_at, updated_at)?,
            blocker_id,
            blocked_id,
        })
    }

    pub fn blocker_id(&self) -> &UserId {
        &self.blocker_id
    }

    pub fn blocked_id(&self) -> &UserId {
        &self.blocked_id
    }
}

impl Entity for BlockedUser {
    type Kind = BlockedUserKind;

    fn base(&self) -> &EntityBase<BlockedUserKind> {
        &self.base
    }
}

/// Repository trait for block relationships.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlockedUserRepository: Send + Sync {
    /// Whether `blocker_id` currently blocks `blocked_id`.
    async fn is_blocked(&self, blocker_id: &UserId, blocked_id: &UserId) -> Result<bool, AppError>;

    /// Persist a block. A duplicate pair fails with `UserAlreadyBlocked`,
    /// any other storage failure with `BlockUserPersistence`.
    async fn block(&self, blocked_user: &BlockedUser) -> Result<(), AppError>;

    /// Remove a block. Returns whether a row was deleted.
    async fn unblock(&self, blocker_id: &UserId, blocked_id: &UserId) -> Result<bool, AppError>;
}
