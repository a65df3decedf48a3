//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database pool, migrations and error translation (PostgreSQL)
//! - Repositories backed by PostgreSQL or process memory
//! - Password hashing (Argon2)

pub mod database;
pub mod hashing;
pub mod repositories;

pub use hashing::Argon2PasswordHasher;
