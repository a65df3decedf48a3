use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::{looks_numeric, ValueObject};
use crate::shared::error::{DomainError, DomainResult};

const FIELD: &str = "Alias";
const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 20;

static ALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._\-@!?]+$").expect("valid alias regex"));

/// Public handle of a user, unique across users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Alias(String);

impl Alias {
    pub fn create(value: &str) -> DomainResult<Self> {
        let value = value.trim();
        Self::validate(value)?;
        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Alias {
    type Props = str;

    fn validate(alias: &str) -> DomainResult<()> {
        let alias = alias.trim();
        let length = alias.chars().count();

        if alias.is_empty() {
            return Err(DomainError::invalid(FIELD, "Alias cannot be empty"));
        }

        if length < MIN_LENGTH {
            return Err(DomainError::invalid(
                FIELD,
                format!("Alias cannot be too short. [MIN: {MIN_LENGTH}]"),
            ));
        }

        if length > MAX_LENGTH {
            return Err(DomainError::invalid(
                FIELD,
                format!("Alias cannot be too long. [MAX: {MAX_LENGTH}]"),
            ));
        }

        if !ALLOWED_CHARS.is_match(alias) {
            return Err(DomainError::invalid(
                FIELD,
                format!(
                    "Alias contains invalid characters. Allowed: letters, numbers, . _ - @ ! ?.\nInvalid Alias: {alias}"
                ),
            ));
        }

        if !alias.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::invalid(
                FIELD,
                format!("Alias must contain at least one letter or number.\nInvalid Alias: {alias}"),
            ));
        }

        if !alias.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            return Err(DomainError::invalid(
                FIELD,
                format!("Alias cannot start with a special character.\nInvalid Alias: {alias}"),
            ));
        }

        if looks_numeric(alias) {
            return Err(DomainError::invalid(FIELD, "Alias cannot be entirely numeric"));
        }

        Ok(())
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
