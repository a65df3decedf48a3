use std::fmt;

use super::ValueObject;
use crate::shared::error::{DomainError, DomainResult};

const FIELD: &str = "Password";
const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 20;

/// User password, either a validated plain value awaiting hashing or a
/// stored hash. Never serialized and redacted in debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn create(value: &str) -> DomainResult<Self> {
        let value = value.trim();
        Self::validate(value)?;
        Ok(Self(value.to_string()))
    }

    /// Wrap an already hashed password loaded from storage.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Password {
    type Props = str;

    fn validate(password: &str) -> DomainResult<()> {
        let password = password.trim();
        let length = password.chars().count();

        if password.is_empty() {
            return Err(DomainError::invalid(FIELD, "Password cannot be empty"));
        }

        if length < MIN_LENGTH {
            return Err(DomainError::invalid(
                FIELD,
                format!("Password cannot be too short: [MIN: {MIN_LENGTH}]"),
            ));
        }

        if length > MAX_LENGTH {
            return Err(DomainError::invalid(
                FIELD,
                format!("Password cannot be too long: [MAX: {MAX_LENGTH}]"),
            ));
        }

        let rules: [(fn(char) -> bool, &str); 4] = [
            (|c| c.is_lowercase(), "Password must have at least one lowercase letter"),
            (|c| c.is_uppercase(), "Password must have at least one uppercase letter"),
            (|c| c.is_ascii_digit(), "Password must have at least one number"),
            (|c| !c.is_alphanumeric(), "Password must have at least one special character"),
        ];

        for (matches, message) in rules {
            if !password.chars().any(matches) {
                return Err(DomainError::invalid(FIELD, message));
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
