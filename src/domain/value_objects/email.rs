use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::ValueObject;
use crate::shared::error::{DomainError, DomainResult};

const FIELD: &str = "Email";

// Local part may not begin or end with a dot; consecutive dots are rejected
// before this pattern runs.
static EMAIL_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9_%+-](?:[a-zA-Z0-9._%+-]*[a-zA-Z0-9_%+-])?@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*\.[a-zA-Z]{2,}$",
    )
    .expect("valid email regex")
});

/// Lowercased email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn create(value: &str) -> DomainResult<Self> {
        let value = normalize(value);
        Self::validate(&value)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

impl ValueObject for Email {
    type Props = str;

    fn validate(email: &str) -> DomainResult<()> {
        let email = normalize(email);

        if email.is_empty() {
            return Err(DomainError::invalid(FIELD, "Email cannot be empty"));
        }

        if email.contains("..") {
            return Err(DomainError::invalid(
                FIELD,
                format!("Email cannot contain consecutive dots: {email}"),
            ));
        }

        if !EMAIL_FORMAT.is_match(&email) {
            return Err(DomainError::invalid(
                FIELD,
                format!("Invalid email format: {email}"),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
