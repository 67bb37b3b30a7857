//! Bakery entity.
//!
//! A bakery owns zero or more baked goods. The only mutable field is `name`;
//! `id` and `created_at` are assigned once by the store.

use chrono::{DateTime, Utc};

use super::errors::DomainError;
use super::ids::BakeryId;

/// A shop that sells baked goods.
#[derive(Debug, Clone, PartialEq)]
pub struct Bakery {
    id: BakeryId,
    name: String,
    created_at: DateTime<Utc>,
}

impl Bakery {
    /// Rebuilds a bakery from stored values.
    pub fn reconstitute(id: BakeryId, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }

    pub fn id(&self) -> BakeryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Input for creating a bakery.
#[derive(Debug, Clone)]
pub struct NewBakery {
    pub name: String,
}

impl NewBakery {
    /// Creates a new bakery input, validating the name.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Bakery name cannot be empty"));
        }
        Ok(Self { name })
    }
}
