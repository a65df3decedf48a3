//! User Repository Implementation
//!
//! PostgreSQL implementation of the UserRepository trait.
//! Maps between the `users` table and the domain User entity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Alias, Email, Entity, Name, Password, User, UserId, UserProps, UserRepository};
use crate::infrastructure::database::{
    corrupt_row, id_of, missing_row, unique_violation, uuid_of, USERS_ALIAS_KEY, USERS_EMAIL_KEY,
};
use crate::shared::error::{AppError, DomainError};

const SELECT_USER: &str = r#"
    SELECT id, name, email, alias, password, created_at, updated_at
    FROM users
"#;

/// Database row representation of the users table.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    alias: String,
    password: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    /// Convert database row to domain User entity.
    fn into_user(self) -> Result<User, AppError> {
        let props = UserProps {
            name: Name::create(&self.name).map_err(corrupt_row)?,
            email: Email::create(&self.email).map_err(corrupt_row)?,
            alias: Alias::create(&self.alias).map_err(corrupt_row)?,
            password: Password::from_hash(self.password),
        };

        User::restore(id_of(self.id)?, props, self.created_at, self.updated_at).map_err(corrupt_row)
    }
}

/// Map a write failure, reporting a violated alias/email index as the
/// corresponding domain conflict.
fn map_write_error(err: sqlx::Error, user: &User) -> AppError {
    match unique_violation(&err) {
        Some(USERS_ALIAS_KEY) => DomainError::AliasAlreadyUsed(user.alias().to_string()).into(),
        Some(USERS_EMAIL_KEY) => DomainError::EmailAlreadyUsed(user.email().to_string()).into(),
        _ => err.into(),
    }
}

/// PostgreSQL user repository implementation.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, filter: &str, value: &str) -> Result<Option<User>, AppError> {
        let query = format!("{SELECT_USER} WHERE {filter} = $1");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserRow::into_user).transpose()
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE id = $1"))
            .bind(uuid_of(id)?)
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_alias(&self, alias: &Alias) -> Result<Option<User>, AppError> {
        self.find_one("alias", alias.value()).await
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AppError> {
        self.find_one("email", email.value()).await
    }

    async fn save(&self, user: &User) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, alias, password, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(uuid_of(user.id())?)
        .bind(user.name().value())
        .bind(user.email().value())
        .bind(user.alias().value())
        .bind(user.password().value())
        .bind(user.created_at())
        .bind(user.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, user))?;

        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = $2, email = $3, alias = $4, password = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(uuid_of(user.id())?)
        .bind(user.name().value())
        .bind(user.email().value())
        .bind(user.alias().value())
        .bind(user.password().value())
        .bind(user.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, user))?;

        if result.rows_affected() == 0 {
            return Err(missing_row("user", user.id()));
        }
        Ok(())
    }
}
