//! Blocked User Repository Implementation
//!
//! A duplicate `(blocker_id, blocked_id)` pair is reported as
//! `UserAlreadyBlocked` and a row blocking its own blocker as
//! `CannotBlockYourself`. Any other failure while writing a block is wrapped
//! as `BlockUserPersistence` with the original cause.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{BlockedUser, BlockedUserRepository, Entity, UserId};
use crate::infrastructure::database::{
    check_violation, unique_violation, uuid_of, BLOCKED_USERS_NOT_SELF, BLOCKED_USERS_PAIR_KEY,
};
use crate::shared::error::{AppError, DomainError, InfrastructureError};

/// PostgreSQL blocked user repository implementation.
#[derive(Clone)]
pub struct PgBlockedUserRepository {
    pool: PgPool,
}

impl PgBlockedUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn block_error(blocked_user: &BlockedUser, e: sqlx::Error) -> AppError {
    if unique_violation(&e) == Some(BLOCKED_USERS_PAIR_KEY) {
        return DomainError::UserAlreadyBlocked(blocked_user.blocked_id().to_string()).into();
    }
    if check_violation(&e) == Some(BLOCKED_USERS_NOT_SELF) {
        return DomainError::CannotBlockYourself.into();
    }

    tracing::error!(error = %e, id = %blocked_user.id(), "Failed to persist block");
    InfrastructureError::BlockUserPersistence {
        id: blocked_user.id().to_string(),
        reason: e.to_string(),
    }
    .into()
}

#[async_trait]
impl BlockedUserRepository for PgBlockedUserRepository {
    async fn is_blocked(&self, blocker_id: &UserId, blocked_id: &UserId) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM blocked_users WHERE blocker_id = $1 AND blocked_id = $2
            )
            "#,
        )
        .bind(uuid_of(blocker_id)?)
        .bind(uuid_of(blocked_id)?)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn block(&self, blocked_user: &BlockedUser) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO blocked_users (id, blocker_id, blocked_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(uuid_of(blocked_user.id())?)
        .bind(uuid_of(blocked_user.blocker_id())?)
        .bind(uuid_of(blocked_user.blocked_id())?)
        .bind(blocked_user.created_at())
        .bind(blocked_user.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| block_error(blocked_user, e))?;

        Ok(())
    }

    async fn unblock(&self, blocker_id: &UserId, blocked_id: &UserId) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM blocked_users
            WHERE blocker_id = $1 AND blocked_id = $2
            "#,
        )
        .bind(uuid_of(blocker_id)?)
        .bind(uuid_of(blocked_id)?)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
