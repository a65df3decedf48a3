use std::fmt;

use serde::Serialize;

use super::ValueObject;
use crate::shared::error::{DomainError, DomainResult};

const FIELD: &str = "ImageUrl";
const ALLOWED_EXTENSIONS: [&str; 4] = [".jpg", ".png", ".webp", ".jpeg"];

/// Location of an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn create(value: &str) -> DomainResult<Self> {
        let value = value.trim();
        Self::validate(value)?;
        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ImageUrl {
    type Props = str;

    fn validate(url: &str) -> DomainResult<()> {
        let url = url.trim();

        if url.is_empty() {
            return Err(DomainError::invalid(FIELD, "Image url cannot be empty"));
        }

        let lowered = url.to_lowercase();
        if !ALLOWED_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext)) {
            return Err(DomainError::invalid(
                FIELD,
                format!("Invalid image extension.\nImage url: {url}"),
            ));
        }

        let base_name = url.rsplit_once('.').map_or("", |(base, _)| base);
        if base_name.trim().is_empty() {
            return Err(DomainError::invalid(
                FIELD,
                "Image URL must contain a filename before the extension",
            ));
        }

        Ok(())
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
