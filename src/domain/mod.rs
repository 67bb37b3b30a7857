//! Domain layer containing the two entities and shared error types.
//!
//! # Module Organization
//!
//! - `ids` - Strongly-typed identifiers for both entities
//! - `errors` - `DomainError` and `ErrorCode`
//! - `bakery` - Bakery entity (owns zero or more baked goods)
//! - `baked_good` - BakedGood entity (priced product belonging to one bakery)

pub mod baked_good;
pub mod bakery;
pub mod errors;
pub mod ids;

pub use baked_good::{BakedGood, NewBakedGood};
pub use bakery::{Bakery, NewBakery};
pub use errors::{DomainError, ErrorCode};
pub use ids::{BakedGoodId, BakeryId};
