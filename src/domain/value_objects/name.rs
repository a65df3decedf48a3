use std::fmt;

use serde::Serialize;

use super::{looks_numeric, ValueObject};
use crate::shared::error::{DomainError, DomainResult};

const FIELD: &str = "Name";
const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 20;

/// Display name of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn create(value: &str) -> DomainResult<Self> {
        let value = value.trim();
        Self::validate(value)?;
        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Name {
    type Props = str;

    fn validate(name: &str) -> DomainResult<()> {
        let name = name.trim();
        let length = name.chars().count();

        if name.is_empty() {
            return Err(DomainError::invalid(FIELD, "Name cannot be empty"));
        }

        if length < MIN_LENGTH {
            return Err(DomainError::invalid(
                FIELD,
                format!("Name cannot be too short. [MIN: {MIN_LENGTH}]"),
            ));
        }

        if length > MAX_LENGTH {
            return Err(DomainError::invalid(
                FIELD,
                format!("Name cannot be too long. [MAX: {MAX_LENGTH}]"),
            ));
        }

        if looks_numeric(name) {
            return Err(DomainError::invalid(FIELD, "Name cannot be entirely numeric"));
        }

        Ok(())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
