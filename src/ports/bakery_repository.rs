//! Bakery repository port.
//!
//! Defines the contract for persisting and retrieving bakeries.
//! Implementations handle the actual database operations.

use crate::domain::{Bakery, BakeryId, DomainError, NewBakery};
use async_trait::async_trait;

/// Repository port for bakery persistence.
#[async_trait]
pub trait BakeryRepository: Send + Sync {
    /// Insert a new bakery and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, bakery: &NewBakery) -> Result<Bakery, DomainError>;

    /// Find a bakery by its id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: BakeryId) -> Result<Option<Bakery>, DomainError>;

    /// List all bakeries in storage order.
    async fn find_all(&self) -> Result<Vec<Bakery>, DomainError>;

    /// Update a bakery's name. `name` is the only mutable field.
    ///
    /// # Errors
    ///
    /// - `BakeryNotFound` if the bakery doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update_name(&self, id: BakeryId, name: &str) -> Result<Bakery, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn bakery_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn BakeryRepository) {}
    }
}
