//! Database Module
//!
//! PostgreSQL connection pool, migrations, and translation of storage
//! failures into the error taxonomy.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use uuid::Uuid;

use crate::config::DatabaseSettings;
use crate::domain::{Id, IdKind};
use crate::shared::error::{AppError, DomainError, InfrastructureError};

/// Unique index on `users.alias`.
pub const USERS_ALIAS_KEY: &str = "users_alias_key";
/// Unique index on `users.email`.
pub const USERS_EMAIL_KEY: &str = "users_email_key";
/// Unique index on `post_likes (user_id, post_id)`.
pub const POST_LIKES_USER_POST_KEY: &str = "post_likes_user_post_key";
/// Unique index on `comment_likes (user_id, comment_id)`.
pub const COMMENT_LIKES_USER_COMMENT_KEY: &str = "comment_likes_user_comment_key";
/// Unique index on `blocked_users (blocker_id, blocked_id)`.
pub const BLOCKED_USERS_PAIR_KEY: &str = "blocked_users_pair_key";
/// Check constraint `blocker_id <> blocked_id` on `blocked_users`.
pub const BLOCKED_USERS_NOT_SELF: &str = "blocked_users_not_self";

/// Create a PostgreSQL connection pool
pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
        .connect(&settings.url)
        .await
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Name of the violated constraint when `err` is a unique violation
/// (SQLSTATE 23505).
pub fn unique_violation(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => Some(db.constraint().unwrap_or("")),
        _ => None,
    }
}

/// Name of the violated constraint when `err` is a check violation
/// (SQLSTATE 23514).
pub fn check_violation(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db) if db.is_check_violation() => Some(db.constraint().unwrap_or("")),
        _ => None,
    }
}

/// Bindable UUID of a domain identifier.
pub(crate) fn uuid_of<K: IdKind>(id: &Id<K>) -> Result<Uuid, AppError> {
    Uuid::parse_str(id.value())
        .map_err(|e| InfrastructureError::Persistence(format!("Unbindable id {id}: {e}")).into())
}

/// Domain identifier of a stored UUID.
pub(crate) fn id_of<K: IdKind>(uuid: Uuid) -> Result<Id<K>, AppError> {
    Id::create(&uuid.to_string()).map_err(corrupt_row)
}

/// An update that matched no stored row.
pub(crate) fn missing_row(entity: &str, id: &impl std::fmt::Display) -> AppError {
    InfrastructureError::Persistence(format!("No {entity} stored with id: {id}")).into()
}

/// Rows that fail domain validation are reported as persistence failures.
pub(crate) fn corrupt_row(err: DomainError) -> AppError {
    InfrastructureError::Persistence(format!("Corrupt row: {err}")).into()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::borrow::Cow;
    use std::fmt;

    use sqlx::error::{DatabaseError, ErrorKind};

    #[derive(Debug)]
    struct ConstraintError {
        kind: ErrorKind,
        constraint: &'static str,
    }

    impl fmt::Display for ConstraintError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "violates constraint \"{}\"", self.constraint)
        }
    }

    impl std::error::Error for ConstraintError {}

    impl DatabaseError for ConstraintError {
        fn message(&self) -> &str {
            "constraint violation"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            match self.kind {
                ErrorKind::UniqueViolation => Some(Cow::Borrowed("23505")),
                ErrorKind::CheckViolation => Some(Cow::Borrowed("23514")),
                _ => None,
            }
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn constraint(&self) -> Option<&str> {
            Some(self.constraint)
        }

        fn kind(&self) -> ErrorKind {
            match self.kind {
                ErrorKind::UniqueViolation => ErrorKind::UniqueViolation,
                ErrorKind::CheckViolation => ErrorKind::CheckViolation,
                ErrorKind::ForeignKeyViolation => ErrorKind::ForeignKeyViolation,
                ErrorKind::NotNullViolation => ErrorKind::NotNullViolation,
                _ => ErrorKind::Other,
            }
        }
    }

    /// A database error as PostgreSQL reports a violated constraint.
    pub(crate) fn constraint_error(kind: ErrorKind, constraint: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(ConstraintError { kind, constraint }))
    }
}
