//! # Domain Entities
//!
//! Identity-carrying, timestamped domain objects built from value objects.
//! Entities compare by identifier only and change state solely through named
//! mutation methods, each of which refreshes `updated_at`.
//!
//! ## Entities
//!
//! - **User**: account with name, email, alias and password hash
//! - **Post**: authored text with up to five images and like/comment counters
//! - **Comment**: reply to a post, itself likeable
//! - **PostLike / CommentLike**: one user's like on one post or comment
//! - **BlockedUser**: ordered blocker/blocked pair
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle. Lookups return `Ok(None)` / `Ok(false)` when
//! nothing matches.

mod blocked_user;
mod comment;
mod entity;
mod like;
mod post;
mod user;

pub use entity::{Entity, EntityBase};

pub use user::{User, UserProps, UserRepository};

pub use post::{Post, PostProps, PostRepository, MAX_POST_IMAGES};

pub use comment::{Comment, CommentProps, CommentRepository};

pub use like::{CommentLike, CommentLikeRepository, PostLike, PostLikeRepository};

pub use blocked_user::{BlockedUser, BlockedUserRepository};

#[cfg(test)]
pub use blocked_user::MockBlockedUserRepository;
#[cfg(test)]
pub use comment::MockCommentRepository;
#[cfg(test)]
pub use like::{MockCommentLikeRepository, MockPostLikeRepository};
#[cfg(test)]
pub use post::MockPostRepository;
#[cfg(test)]
pub use user::MockUserRepository;
