//! Collaborator contracts consumed by the application services.

use crate::shared::error::AppError;

/// One-way password hashing.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a validated plain-text password.
    fn hash(&self, password: &str) -> Result<String, AppError>;

    /// Check a plain-text password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError>;
}
