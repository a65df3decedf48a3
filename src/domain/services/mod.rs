//! # Domain Services
//!
//! Domain services encapsulate rules that don't naturally belong to a single
//! entity.
//!
//! ## Guards
//!
//! Stateless checks that consult a repository before a write is attempted:
//!
//! - **EnsureAliasIsUnique / EnsureEmailIsUnique**: at most one owner per
//!   alias/email, optionally ignoring the user being updated
//! - **EnsureOnePostLikePerUser / EnsureOneCommentLikePerUser**: a like is
//!   binary
//! - **BlockGuard**: no self-block, no double block
//!
//! Guards are advisory. Storage-level unique constraints remain the source of
//! truth under concurrency.
//!
//! ## Pure services
//!
//! - **PostDomainService**: filtering and ordering of posts
//! - **CommentDomainService**: most liked comment

mod block_guard;
mod comment_domain_service;
mod like_guards;
mod post_domain_service;
mod uniqueness;

pub use block_guard::{ensure_not_self, BlockGuard};
pub use comment_domain_service::CommentDomainService;
pub use like_guards::{EnsureOneCommentLikePerUser, EnsureOnePostLikePerUser};
pub use post_domain_service::PostDomainService;
pub use uniqueness::{EnsureAliasIsUnique, EnsureEmailIsUnique};
