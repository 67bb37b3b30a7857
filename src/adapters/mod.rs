//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `sqlite` - SQLite repository implementations
//! - `http` - Axum REST API

pub mod http;
pub mod sqlite;
