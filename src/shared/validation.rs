//! Validation Utilities
//!
//! Presence checks for request bodies and query parameters. Anything that is
//! absent, or a string that is blank once trimmed, counts as missing.

use validator::ValidationErrors;

use super::error::{AppError, ApplicationError};

/// Convert request body validation errors to `MISSING_REQUIRED_FIELDS`.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();

    ApplicationError::MissingRequiredFields(fields).into()
}

fn missing(values: &[(&str, Option<&str>)]) -> Vec<String> {
    values
        .iter()
        .filter(|(_, value)| value.map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Require every named body field to be present and non-blank.
pub fn require_fields(values: &[(&str, Option<&str>)]) -> Result<(), AppError> {
    let missing = missing(values);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApplicationError::MissingRequiredFields(missing).into())
    }
}

/// Require every named query/path parameter to be present and non-blank.
pub fn require_parameters(values: &[(&str, Option<&str>)]) -> Result<(), AppError> {
    let missing = missing(values);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApplicationError::MissingRequiredParameters(missing).into())
    }
}
