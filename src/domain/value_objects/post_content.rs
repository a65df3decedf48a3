use std::fmt;

use serde::Serialize;

use super::ValueObject;
use crate::shared::error::{DomainError, DomainResult};

const FIELD: &str = "PostContent";
const MAX_LENGTH: usize = 2500;

/// Shortest summary that still says something.
pub(crate) const MIN_SUMMARY_LENGTH: usize = 10;

/// Body text of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PostContent(String);

impl PostContent {
    pub const DEFAULT_SUMMARY_LENGTH: usize = 200;

    pub fn create(value: &str) -> DomainResult<Self> {
        let value = value.trim();
        Self::validate(value)?;
        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// First `max_length` characters of the content.
    pub fn summary(&self, max_length: usize) -> DomainResult<String> {
        summarize(FIELD, &self.0, max_length)
    }
}

/// Character-safe prefix shared by post and comment summaries.
pub(crate) fn summarize(field: &'static str, text: &str, max_length: usize) -> DomainResult<String> {
    if max_length < MIN_SUMMARY_LENGTH {
        return Err(DomainError::invalid(
            field,
            format!(
                "The maximum length must be at least {MIN_SUMMARY_LENGTH} to allow for a meaningful summary"
            ),
        ));
    }
    Ok(text.chars().take(max_length).collect())
}

impl ValueObject for PostContent {
    type Props = str;

    fn validate(content: &str) -> DomainResult<()> {
        let content = content.trim();

        if content.is_empty() {
            return Err(DomainError::invalid(FIELD, "Post content cannot be empty"));
        }

        if content.chars().count() > MAX_LENGTH {
            return Err(DomainError::invalid(
                FIELD,
                format!("Post content cannot be too long. [MAX: {MAX_LENGTH}]"),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for PostContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
