//! # Domain Layer
//!
//! The domain invariant kernel of the social server: typed identifiers,
//! self-validating value objects, timestamped entities and the guards that
//! protect cross-aggregate rules. It is independent of any framework or
//! storage engine.
//!
//! ## Structure
//!
//! - **entities**: User, Post, Comment, likes and blocks, plus repository traits
//! - **value_objects**: Id, Alias, Email, Name, ImageUrl, Counter, ...
//! - **services**: uniqueness/relationship guards and pure domain services
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Invalid values cannot be constructed
//! - Repository traits define data access contracts
//! - Entities change only through named mutation methods

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
