//! # Domain Value Objects
//!
//! Immutable, self-validating types without identity. Every value object is
//! built through a static factory that runs its ordered checks and stops at
//! the first violation, so the same bad input always yields the same
//! message.
//!
//! ## Value Objects
//!
//! - **Id**: kind-tagged UUID v4 identifiers (`UserId`, `PostId`, ...)
//! - **Alias / Email / Name / Password**: user profile fields
//! - **ImageUrl**: link to an uploaded image
//! - **PostContent / CommentContent**: bounded text bodies
//! - **Counter**: non-negative integer with increment/decrement algebra

use std::fmt;

use crate::shared::error::DomainResult;

mod alias;
mod comment_content;
mod counter;
mod email;
mod id;
mod image_url;
mod name;
mod password;
mod post_content;

pub use alias::Alias;
pub use comment_content::CommentContent;
pub use counter::Counter;
pub use email::Email;
pub use id::*;
pub use image_url::ImageUrl;
pub use name::Name;
pub use password::Password;
pub use post_content::PostContent;

/// Shared contract of all value objects.
pub trait ValueObject: Sized + Clone + PartialEq + fmt::Debug {
    /// Raw input the value object is built from.
    type Props: ?Sized;

    /// Run the ordered checks, failing on the first violated rule.
    fn validate(props: &Self::Props) -> DomainResult<()>;

    /// Structural equality.
    fn is_equal(&self, other: &Self) -> bool {
        self == other
    }
}

/// True when the whole string reads as a number: decimal, exponent,
/// `Infinity`, or a `0x`/`0o`/`0b` integer literal.
pub(crate) fn looks_numeric(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }

    if let Some((radix, digits)) = radix_literal(value) {
        return !digits.is_empty() && u128::from_str_radix(digits, radix).is_ok();
    }

    let unsigned = value.trim_start_matches(['+', '-']);
    if unsigned == "Infinity" {
        return value.len() - unsigned.len() <= 1;
    }

    // Rust's float parser also accepts "inf" and "NaN", which are names here.
    if unsigned.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return false;
    }

    value.parse::<f64>().is_ok()
}

fn radix_literal(value: &str) -> Option<(u32, &str)> {
    let prefix = value.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    Some((radix, &value[2..]))
}
