//! User Service
//!
//! Registration and profile management. Value objects are built first so
//! malformed input fails before any repository call, then the uniqueness
//! guards run, then the write.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::interfaces::PasswordHasher;
use crate::domain::services::{EnsureAliasIsUnique, EnsureEmailIsUnique};
use crate::domain::{Alias, Email, Entity, Name, Password, User, UserId, UserProps, UserRepository};
use crate::shared::error::{AppError, ApplicationError};

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create an account
    async fn register(&self, dto: RegisterUserDto) -> Result<UserDto, AppError>;

    /// Change any subset of name, email, alias and password
    async fn update_profile(&self, user_id: &str, dto: UpdateProfileDto) -> Result<UserDto, AppError>;

    /// Get user by ID
    async fn get_user(&self, user_id: &str) -> Result<UserDto, AppError>;

    /// Get user by alias
    async fn get_user_by_alias(&self, alias: &str) -> Result<UserDto, AppError>;
}

/// User data transfer object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub alias: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            alias: user.alias().to_string(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

/// Registration input
#[derive(Debug, Clone)]
pub struct RegisterUserDto {
    pub name: String,
    pub email: String,
    pub alias: String,
    pub password: String,
}

/// Update profile request
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub alias: Option<String>,
    pub password: Option<String>,
}

/// UserService implementation
pub struct UserServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    hasher: Arc<dyn PasswordHasher>,
    alias_guard: EnsureAliasIsUnique<U>,
    email_guard: EnsureEmailIsUnique<U>,
}

impl<U> UserServiceImpl<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            alias_guard: EnsureAliasIsUnique::new(Arc::clone(&user_repo)),
            email_guard: EnsureEmailIsUnique::new(Arc::clone(&user_repo)),
            user_repo,
            hasher,
        }
    }

    async fn find_user(&self, user_id: &UserId) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("User not found by id: {user_id}")).into())
    }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
    U: UserRepository + 'static,
{
    async fn register(&self, dto: RegisterUserDto) -> Result<UserDto, AppError> {
        let name = Name::create(&dto.name)?;
        let email = Email::create(&dto.email)?;
        let alias = Alias::create(&dto.alias)?;
        let password = Password::create(&dto.password)?;

        self.email_guard.assert_email_is_unique(&email, None).await?;
        self.alias_guard.assert_alias_is_unique(&alias, None).await?;

        let hash = self.hasher.hash(password.value())?;
        let user = User::create(UserProps {
            name,
            email,
            alias,
            password: Password::from_hash(hash),
        })?;

        self.user_repo.save(&user).await?;

        tracing::info!(user_id = %user.id(), alias = %user.alias(), "User registered");

        Ok(UserDto::from(&user))
    }

    async fn update_profile(&self, user_id: &str, dto: UpdateProfileDto) -> Result<UserDto, AppError> {
        let user_id = UserId::create(user_id)?;

        // Validate everything before the first lookup.
        let name = dto.name.as_deref().map(Name::create).transpose()?;
        let email = dto.email.as_deref().map(Email::create).transpose()?;
        let alias = dto.alias.as_deref().map(Alias::create).transpose()?;
        let password = dto.password.as_deref().map(Password::create).transpose()?;

        let mut user = self.find_user(&user_id).await?;
        // Guards exclude the stored row, not whatever spelling the caller sent.
        let stored_id = user.id().clone();

        if let Some(email) = email {
            self.email_guard
                .assert_email_is_unique(&email, Some(&stored_id))
                .await?;
            user.update_email(email);
        }

        if let Some(alias) = alias {
            self.alias_guard
                .assert_alias_is_unique(&alias, Some(&stored_id))
                .await?;
            user.update_alias(alias);
        }

        if let Some(name) = name {
            user.update_name(name);
        }

        if let Some(password) = password {
            let hash = self.hasher.hash(password.value())?;
            user.update_password(Password::from_hash(hash));
        }

        self.user_repo.update(&user).await?;

        tracing::info!(user_id = %user_id, "User profile updated");

        Ok(UserDto::from(&user))
    }

    async fn get_user(&self, user_id: &str) -> Result<UserDto, AppError> {
        let user_id = UserId::create(user_id)?;
        let user = self.find_user(&user_id).await?;

        Ok(UserDto::from(&user))
    }

    async fn get_user_by_alias(&self, alias: &str) -> Result<UserDto, AppError> {
        let alias = Alias::create(alias)?;
        let user = self
            .user_repo
            .find_by_alias(&alias)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("User not found by alias: {alias}")))?;

        Ok(UserDto::from(&user))
    }
}
