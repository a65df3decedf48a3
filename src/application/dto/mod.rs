//! Data Transfer Objects
//!
//! Request shapes accepted by the HTTP layer. Response shapes live next to
//! the services that produce them.

pub mod request;

pub use request::*;
