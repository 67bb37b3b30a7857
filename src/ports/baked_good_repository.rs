//! Baked good repository port.
//!
//! Defines the contract for persisting and retrieving baked goods, including
//! the price-ordered queries the API exposes.

use crate::domain::{BakedGood, BakedGoodId, DomainError, NewBakedGood};
use async_trait::async_trait;

/// Repository port for baked good persistence.
#[async_trait]
pub trait BakedGoodRepository: Send + Sync {
    /// Insert a new baked good and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `ForeignKeyViolation` if `bakery_id` references no existing bakery
    /// - `DatabaseError` on persistence failure
    async fn create(&self, baked_good: &NewBakedGood) -> Result<BakedGood, DomainError>;

    /// Find a baked good by its id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: BakedGoodId) -> Result<Option<BakedGood>, DomainError>;

    /// List all baked goods in storage order.
    async fn find_all(&self) -> Result<Vec<BakedGood>, DomainError>;

    /// List all baked goods ordered by price descending.
    ///
    /// Ties are broken by insertion order, so the ordering is stable.
    async fn find_all_by_price_desc(&self) -> Result<Vec<BakedGood>, DomainError>;

    /// Find the single most expensive baked good.
    ///
    /// On price ties the first inserted record wins. Returns `None` when the
    /// store is empty.
    async fn find_most_expensive(&self) -> Result<Option<BakedGood>, DomainError>;

    /// Delete a baked good.
    ///
    /// # Errors
    ///
    /// - `BakedGoodNotFound` if the baked good doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: BakedGoodId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn baked_good_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn BakedGoodRepository) {}
    }
}
