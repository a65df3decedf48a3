//! Repository Implementations
//!
//! Concrete implementations of the repository traits defined in the domain
//! layer. Each storage backend reports unique-key collisions as the same
//! domain errors, so services behave identically on either one.
//!
//! ## Available Repositories
//!
//! - **PgUserRepository** - users with unique alias and email
//! - **PgPostRepository** - posts with images and counters
//! - **PgCommentRepository** - comments with reply ids
//! - **PgPostLikeRepository / PgCommentLikeRepository** - one like per user and target
//! - **PgBlockedUserRepository** - blocker/blocked pairs
//! - **InMemoryStore** - hands out in-memory versions of all of the above
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use social_server::infrastructure::repositories::{PgUserRepository, PgPostRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let user_repo = PgUserRepository::new(pool.clone());
//!     let post_repo = PgPostRepository::new(pool.clone());
//! }
//! ```

pub mod blocked_user_repository;
pub mod comment_repository;
pub mod like_repository;
pub mod memory;
pub mod post_repository;
pub mod user_repository;

pub use blocked_user_repository::PgBlockedUserRepository;
pub use comment_repository::PgCommentRepository;
pub use like_repository::{PgCommentLikeRepository, PgPostLikeRepository};
pub use post_repository::PgPostRepository;
pub use user_repository::PgUserRepository;

pub use memory::{
    InMemoryBlockedUserRepository, InMemoryCommentLikeRepository, InMemoryCommentRepository,
    InMemoryPostLikeRepository, InMemoryPostRepository, InMemoryStore, InMemoryUserRepository,
};
