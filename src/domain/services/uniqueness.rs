//! Alias and email uniqueness guards.
//!
//! Both are advisory read-then-write checks. The unique indexes on
//! `users.alias` and `users.email` settle races between concurrent writers
//! and are translated into the same errors by the repositories.

use std::sync::Arc;

use crate::domain::entities::{Entity, UserRepository};
use crate::domain::value_objects::{Alias, Email, UserId};
use crate::shared::error::{AppError, DomainError};

/// Fails when another user already owns an alias.
pub struct EnsureAliasIsUnique<R: UserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> EnsureAliasIsUnique<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Passes when nobody owns `alias`, or when its owner is `ignore_id`.
    pub async fn assert_alias_is_unique(
        &self,
        alias: &Alias,
        ignore_id: Option<&UserId>,
    ) -> Result<(), AppError> {
        let Some(owner) = self.repository.find_by_alias(alias).await? else {
            return Ok(());
        };

        if ignore_id.is_some_and(|id| owner.id().is_equal(id)) {
            return Ok(());
        }

        tracing::warn!(alias = %alias, "Alias already in use");
        Err(DomainError::AliasAlreadyUsed(alias.to_string()).into())
    }
}

/// Fails when another user already owns an email address.
pub struct EnsureEmailIsUnique<R: UserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> EnsureEmailIsUnique<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Passes when nobody owns `email`, or when its owner is `ignore_id`.
    pub async fn assert_email_is_unique(
        &self,
        email: &Email,
        ignore_id: Option<&UserId>,
    ) -> Result<(), AppError> {
        let Some(owner) = self.repository.find_by_email(email).await? else {
            return Ok(());
        };

        if ignore_id.is_some_and(|id| owner.id().is_equal(id)) {
            return Ok(());
        }

        tracing::warn!(email = %email, "Email already in use");
        Err(DomainError::EmailAlreadyUsed(email.to_string()).into())
    }
}
