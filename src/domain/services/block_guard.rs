//! No-self-block / no-double-block guard.

use std::sync::Arc;

use crate::domain::entities::BlockedUserRepository;
use crate::domain::value_objects::UserId;
use crate::shared::error::{AppError, DomainError, DomainResult};

/// Rejects `blocker == blocked` without touching storage.
pub fn ensure_not_self(blocker_id: &UserId, blocked_id: &UserId) -> DomainResult<()> {
    if blocker_id.is_equal(blocked_id) {
        return Err(DomainError::CannotBlockYourself);
    }
    Ok(())
}

pub struct BlockGuard<R: BlockedUserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: BlockedUserRepository + ?Sized> BlockGuard<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Self-block check first, then the existing-row lookup for the exact
    /// ordered pair.
    pub async fn assert_can_block(
        &self,
        blocker_id: &UserId,
        blocked_id: &UserId,
    ) -> Result<(), AppError> {
        ensure_not_self(blocker_id, blocked_id)?;

        if self.repository.is_blocked(blocker_id, blocked_id).await? {
            tracing::warn!(blocker_id = %blocker_id, blocked_id = %blocked_id, "User already blocked");
            return Err(DomainError::UserAlreadyBlocked(blocked_id.to_string()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MockBlockedUserRepository;
    use crate::shared::error::ErrorCode;

    #[tokio::test]
    async fn test_self_block_fails_without_lookup() {
        let mut repo = MockBlockedUserRepository::new();
        repo.expect_is_blocked().never();
        let guard = BlockGuard::new(Arc::new(repo));
        let me = UserId::generate();

        let err = guard.assert_can_block(&me, &me).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::CannotBlockYourself);
    }

    #[test]
    fn test_self_block_ignores_id_case() {
        let lower = UserId::create("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let upper = UserId::create("550E8400-E29B-41D4-A716-446655440000").unwrap();

        let err = ensure_not_self(&lower, &upper).unwrap_err();
        assert!(matches!(err, DomainError::CannotBlockYourself));
    }

    #[tokio::test]
    async fn test_existing_ordered_pair_fails() {
        let (a, b) = (UserId::generate(), UserId::generate());

        let mut repo = MockBlockedUserRepository::new();
        let (blocker, blocked) = (a.clone(), b.clone());
        repo.expect_is_blocked()
            .returning(move |x, y| Ok(x == &blocker && y == &blocked));
        let guard = BlockGuard::new(Arc::new(repo));

        let err = guard.assert_can_block(&a, &b).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::UserAlreadyBlocked);

        // The reverse direction is a different relationship.
        assert!(guard.assert_can_block(&b, &a).await.is_ok());
    }
}
