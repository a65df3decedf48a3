//! Shared Utilities
//!
//! Common utilities used across all layers.

pub mod error;
pub mod http_status;
pub mod id_generator;
pub mod validation;
