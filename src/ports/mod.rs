//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `BakeryRepository` - Persistence port for bakeries
//! - `BakedGoodRepository` - Persistence port for baked goods

mod baked_good_repository;
mod bakery_repository;

pub use baked_good_repository::BakedGoodRepository;
pub use bakery_repository::BakeryRepository;
