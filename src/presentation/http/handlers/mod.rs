//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints. Handlers only shape requests and
//! responses; the services decide everything else.

pub mod block;
pub mod health;
pub mod like;
pub mod post;
pub mod user;
