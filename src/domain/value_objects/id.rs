//! Typed UUID identifiers.
//!
//! `Id<K>` wraps a UUID v4 string and is parameterized by a zero-sized kind
//! marker, so a `PostId` cannot be passed where a `UserId` is expected. The
//! kind exists only at the type level and is never serialized.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ValueObject;
use crate::shared::error::{DomainError, DomainResult};
use crate::shared::id_generator::{IdGenerator, UuidV4Generator};

static UUID_V4: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-4[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$",
    )
    .expect("valid uuid regex")
});

/// Logical entity kind of an identifier.
pub trait IdKind: 'static {
    const NAME: &'static str;
}

macro_rules! id_kind {
    ($(#[$meta:meta])* $kind:ident => $alias:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $kind {}

        impl IdKind for $kind {
            const NAME: &'static str = stringify!($alias);
        }

        $(#[$meta])*
        pub type $alias = Id<$kind>;
    };
}

id_kind!(/// Identifies a user.
    UserKind => UserId);
id_kind!(/// Identifies a post.
    PostKind => PostId);
id_kind!(/// Identifies a comment.
    CommentKind => CommentId);
id_kind!(/// Identifies a post or comment like.
    LikeKind => LikeId);
id_kind!(/// Identifies a block relationship.
    BlockedUserKind => BlockedUserId);

/// UUID-backed identifier of kind `K`.
pub struct Id<K: IdKind> {
    value: String,
    _kind: PhantomData<fn() -> K>,
}

impl<K: IdKind> Id<K> {
    /// Build an identifier from a known UUID string (e.g. a database row).
    /// The stored value is the canonical lowercase form, matching how
    /// UUID columns compare.
    pub fn create(value: &str) -> DomainResult<Self> {
        let value = value.trim();
        Self::validate(value)?;
        Ok(Self::new_unchecked(value.to_ascii_lowercase()))
    }

    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self::new_unchecked(UuidV4Generator.generate())
    }

    /// Generate an identifier through a pluggable generator. The generated
    /// value is validated like any other input.
    pub fn generate_with(generator: &dyn IdGenerator) -> DomainResult<Self> {
        Self::create(&generator.generate())
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Compares the string values. Kinds are already equal by construction.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.value == other.value
    }

    fn new_unchecked(value: String) -> Self {
        Self {
            value,
            _kind: PhantomData,
        }
    }
}

impl<K: IdKind> ValueObject for Id<K> {
    type Props = str;

    fn validate(value: &str) -> DomainResult<()> {
        if value.trim().is_empty() {
            return Err(DomainError::invalid("Id", "Id cannot be empty"));
        }

        if !UUID_V4.is_match(value) {
            return Err(DomainError::invalid(
                "Id",
                "Invalid Id format. Id must be a UUID.",
            ));
        }

        Ok(())
    }
}

impl<K: IdKind> Clone for Id<K> {
    fn clone(&self) -> Self {
        Self::new_unchecked(self.value.clone())
    }
}

impl<K: IdKind> PartialEq for Id<K> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<K: IdKind> Eq for Id<K> {}

impl<K: IdKind> Hash for Id<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K: IdKind> fmt::Debug for Id<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", K::NAME, self.value)
    }
}

impl<K: IdKind> fmt::Display for Id<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<K: IdKind> FromStr for Id<K> {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::create(s)
    }
}

impl<K: IdKind> Serialize for Id<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, K: IdKind> Deserialize<'de> for Id<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::create(&raw).map_err(serde::de::Error::custom)
    }
}
