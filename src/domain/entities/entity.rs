//! Identity and timestamps shared by every entity.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{Id, IdKind};
use crate::shared::error::{DomainError, DomainResult};

/// Identifier plus creation/update timestamps of an entity.
///
/// `updated_at` only moves through [`EntityBase::touch`], which is reserved
/// for the owning entity's mutation methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityBase<K: IdKind> {
    id: Id<K>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<K: IdKind> EntityBase<K> {
    /// Build the base of a new (no id) or rehydrated (known id) entity.
    /// Missing timestamps default to the same instant.
    pub fn new(
        id: Option<Id<K>>,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        let now = Utc::now();
        let created_at = created_at.unwrap_or(now);
        let updated_at = updated_at.unwrap_or(now);

        if created_at > updated_at {
            return Err(DomainError::InvalidEntityTimestamps);
        }

        Ok(Self {
            id: id.unwrap_or_else(Id::generate),
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> &Id<K> {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Refresh `updated_at`. Never moves it before `created_at`, even when
    /// the wall clock does.
    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.created_at);
    }
}

/// Identity-compared domain object.
pub trait Entity {
    type Kind: IdKind;

    fn base(&self) -> &EntityBase<Self::Kind>;

    fn id(&self) -> &Id<Self::Kind> {
        self.base().id()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.base().created_at()
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.base().updated_at()
    }

    /// Entities are equal when their identifiers are, whatever their fields.
    fn is_equal(&self, other: &Self) -> bool {
        self.id().is_equal(other.id())
    }
}
