//! Block Service
//!
//! Blocking and unblocking between two existing users.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::services::{ensure_not_self, BlockGuard};
use crate::domain::{BlockedUser, BlockedUserRepository, Entity, UserId, UserRepository};
use crate::shared::error::{AppError, ApplicationError};

/// Block service trait
#[async_trait]
pub trait BlockService: Send + Sync {
    /// `blocker_id` blocks `blocked_id`
    async fn block_user(&self, blocker_id: &str, blocked_id: &str) -> Result<BlockedUserDto, AppError>;

    /// Lift an existing block
    async fn unblock_user(&self, blocker_id: &str, blocked_id: &str) -> Result<(), AppError>;
}

/// Block relationship data transfer object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockedUserDto {
    pub id: String,
    pub blocker_id: String,
    pub blocked_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<&BlockedUser> for BlockedUserDto {
    fn from(block: &BlockedUser) -> Self {
        Self {
            id: block.id().to_string(),
            blocker_id: block.blocker_id().to_string(),
            blocked_id: block.blocked_id().to_string(),
            created_at: block.created_at(),
        }
    }
}

/// BlockService implementation
pub struct BlockServiceImpl<U, B>
where
    U: UserRepository,
    B: BlockedUserRepository,
{
    user_repo: Arc<U>,
    block_repo: Arc<B>,
    guard: BlockGuard<B>,
}

impl<U, B> BlockServiceImpl<U, B>
where
    U: UserRepository,
    B: BlockedUserRepository,
{
    pub fn new(user_repo: Arc<U>, block_repo: Arc<B>) -> Self {
        Self {
            guard: BlockGuard::new(Arc::clone(&block_repo)),
            user_repo,
            block_repo,
        }
    }

    /// Both users must exist. Lookups run concurrently.
    async fn ensure_users_exist(&self, first: &UserId, second: &UserId) -> Result<(), AppError> {
        let (a, b) = futures::try_join!(
            self.user_repo.find_by_id(first),
            self.user_repo.find_by_id(second)
        )?;

        for (id, found) in [(first, a.is_some()), (second, b.is_some())] {
            if !found {
                return Err(ApplicationError::not_found(format!("User not found by id: {id}")).into());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<U, B> BlockService for BlockServiceImpl<U, B>
where
    U: UserRepository + 'static,
    B: BlockedUserRepository + 'static,
{
    async fn block_user(&self, blocker_id: &str, blocked_id: &str) -> Result<BlockedUserDto, AppError> {
        let blocker_id = UserId::create(blocker_id)?;
        let blocked_id = UserId::create(blocked_id)?;

        ensure_not_self(&blocker_id, &blocked_id)?;
        self.ensure_users_exist(&blocker_id, &blocked_id).await?;
        self.guard.assert_can_block(&blocker_id, &blocked_id).await?;

        let block = BlockedUser::create(blocker_id, blocked_id)?;
        self.block_repo.block(&block).await?;

        tracing::info!(
            blocker_id = %block.blocker_id(),
            blocked_id = %block.blocked_id(),
            "User blocked"
        );

        Ok(BlockedUserDto::from(&block))
    }

    async fn unblock_user(&self, blocker_id: &str, blocked_id: &str) -> Result<(), AppError> {
        let blocker_id = UserId::create(blocker_id)?;
        let blocked_id = UserId::create(blocked_id)?;

        self.ensure_users_exist(&blocker_id, &blocked_id).await?;

        if !self.block_repo.unblock(&blocker_id, &blocked_id).await? {
            return Err(ApplicationError::UserIsNotBlocked {
                user_id: blocked_id.to_string(),
            }
            .into());
        }

        tracing::info!(blocker_id = %blocker_id, blocked_id = %blocked_id, "User unblocked");

        Ok(())
    }
}
