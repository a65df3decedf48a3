//! User entity and repository trait.
//!
//! Maps to the `users` table. `alias` and `email` carry unique indexes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::entity::{Entity, EntityBase};
use crate::domain::value_objects::{Alias, Email, Name, Password, UserId, UserKind};
use crate::shared::error::{AppError, DomainResult};

/// Profile fields of a user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProps {
    pub name: Name,
    pub email: Email,
    pub alias: Alias,
    /// Argon2 hash once persisted.
    pub password: Password,
}

/// A registered account.
#[derive(Debug, Clone)]
pub struct User {
    base: EntityBase<UserKind>,
    props: UserProps,
}

impl User {
    /// A brand new user with a freshly generated id.
    pub fn create(props: UserProps) -> DomainResult<Self> {
        Ok(Self {
            base: EntityBase::new(None, None, None)?,
            props,
        })
    }

    /// Rebuild a stored user.
    pub fn restore(
        id: UserId,
        props: UserProps,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            base: EntityBase::new(Some(id), Some(created_at), Some(updated_at))?,
            props,
        })
    }

    pub fn name(&self) -> &Name {
        &self.props.name
    }

    pub fn email(&self) -> &Email {
        &self.props.email
    }

    pub fn alias(&self) -> &Alias {
        &self.props.alias
    }

    pub fn password(&self) -> &Password {
        &self.props.password
    }

    pub fn update_name(&mut self, name: Name) {
        self.props.name = name;
        self.base.touch();
    }

    pub fn update_email(&mut self, email: Email) {
        self.props.email = email;
        self.base.touch();
    }

    pub fn update_alias(&mut self, alias: Alias) {
        self.props.alias = alias;
        self.base.touch();
    }

    pub fn update_password(&mut self, password: Password) {
        self.props.password = password;
        self.base.touch();
    }
}

impl Entity for User {
    type Kind = UserKind;

    fn base(&self) -> &EntityBase<UserKind> {
        &self.base
    }
}

/// Repository trait for User data access operations.
///
/// `save` and `update` must reject a duplicate alias or email with the same
/// domain error the uniqueness guards raise.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AppError>;

    async fn find_by_alias(&self, alias: &Alias) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AppError>;

    /// Insert a new user.
    async fn save(&self, user: &User) -> Result<(), AppError>;

    /// Overwrite the profile of an existing user.
    async fn update(&self, user: &User) -> Result<(), AppError>;
}
