//! # Social Server Library
//!
//! Backend of a small social network: users with unique aliases and emails,
//! posts with images, comments, likes and user blocking. The core is a
//! domain kernel of typed identifiers, self-validating value objects and
//! timestamped entities, guarded by repository-backed uniqueness and
//! relationship checks. Every failure is classified into one error taxonomy
//! with a single HTTP status mapping.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: value objects, entities, guards and repository traits
//! - **Application Layer**: use-case services and request DTOs
//! - **Infrastructure Layer**: PostgreSQL and in-memory repositories, password hashing
//! - **Presentation Layer**: HTTP routes and handlers
//!
//! ## Module Structure
//!
//! ```text
//! social_server/
//! +-- config/         Configuration management
//! +-- domain/         Value objects, entities, guards, repository traits
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Database, in-memory store, hashing
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Error taxonomy, status mapping, validation, id generation
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
pub mod startup;
pub mod telemetry;
