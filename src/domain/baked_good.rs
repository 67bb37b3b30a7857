//! BakedGood entity.
//!
//! A baked good is a priced product belonging to exactly one bakery via
//! `bakery_id`. No field is mutable after creation; the record is either
//! kept as-is or deleted.

use chrono::{DateTime, Utc};

use super::errors::DomainError;
use super::ids::{BakedGoodId, BakeryId};

/// A priced product owned by a bakery.
#[derive(Debug, Clone, PartialEq)]
pub struct BakedGood {
    id: BakedGoodId,
    name: String,
    price: f64,
    bakery_id: BakeryId,
    created_at: DateTime<Utc>,
}

impl BakedGood {
    /// Rebuilds a baked good from stored values.
    pub fn reconstitute(
        id: BakedGoodId,
        name: String,
        price: f64,
        bakery_id: BakeryId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            bakery_id,
            created_at,
        }
    }

    pub fn id(&self) -> BakedGoodId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn bakery_id(&self) -> BakeryId {
        self.bakery_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Input for creating a baked good.
#[derive(Debug, Clone)]
pub struct NewBakedGood {
    pub name: String,
    pub price: f64,
    pub bakery_id: BakeryId,
}

impl NewBakedGood {
    /// Creates a new baked good input, validating name and price.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        bakery_id: BakeryId,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Baked good name cannot be empty"));
        }
        if !price.is_finite() {
            return Err(DomainError::validation("Price must be a finite number"));
        }
        Ok(Self {
            name,
            price,
            bakery_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_baked_good_accepts_valid_input() {
        let input = NewBakedGood::new("Croissant", 3.5, BakeryId::from_i64(1)).unwrap();
        assert_eq!(input.name, "Croissant");
        assert_eq!(input.price, 3.5);
    }

    #[test]
    fn new_baked_good_rejects_empty_name() {
        assert!(NewBakedGood::new("", 3.5, BakeryId::from_i64(1)).is_err());
    }

    #[test]
    fn new_baked_good_rejects_non_finite_price() {
        assert!(NewBakedGood::new("Croissant", f64::NAN, BakeryId::from_i64(1)).is_err());
        assert!(NewBakedGood::new("Croissant", f64::INFINITY, BakeryId::from_i64(1)).is_err());
    }
}
