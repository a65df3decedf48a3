use std::fmt;

use serde::Serialize;

use super::post_content::summarize;
use super::ValueObject;
use crate::shared::error::{DomainError, DomainResult};

const FIELD: &str = "CommentContent";
const MAX_LENGTH: usize = 300;

/// Body text of a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommentContent(String);

impl CommentContent {
    pub const DEFAULT_SUMMARY_LENGTH: usize = 50;

    pub fn create(value: &str) -> DomainResult<Self> {
        let value = value.trim();
        Self::validate(value)?;
        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn summary(&self, max_length: usize) -> DomainResult<String> {
        summarize(FIELD, &self.0, max_length)
    }
}

impl ValueObject for CommentContent {
    type Props = str;

    fn validate(content: &str) -> DomainResult<()> {
        let content = content.trim();

        if content.is_empty() {
            return Err(DomainError::invalid(FIELD, "Comment content cannot be empty"));
        }

        if content.chars().count() > MAX_LENGTH {
            return Err(DomainError::invalid(
                FIELD,
                format!("Comment content cannot be too long. [MAX: {MAX_LENGTH}]"),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for CommentContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
