//! Identifier generators
//!
//! Source of fresh UUID v4 strings for new entities. Swappable so tests can
//! produce deterministic identifiers.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Produces textual UUID v4 values.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Cryptographically random UUID v4 generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator yielding `00000000-0000-4000-8000-000000000001`,
/// `...0002`, and so on. Still matches the UUID v4 textual format.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the sequence after `start`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("00000000-0000-4000-8000-{:012x}", n & 0xFFFF_FFFF_FFFF)
    }
}
