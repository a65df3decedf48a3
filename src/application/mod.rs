//! Application Layer
//!
//! Use cases that orchestrate value objects, guards, entities and
//! repositories. This layer sits between the presentation and domain
//! layers and reports every failure as an `AppError`.

pub mod dto;
pub mod interfaces;
pub mod services;
