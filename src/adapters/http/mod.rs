//! HTTP adapters - REST API implementation.
//!
//! Each entity has its own module with DTOs, handlers, and routes. The
//! shared pieces live alongside them:
//!
//! - `state` - `AppState` holding the repository trait objects
//! - `error` - `ApiError` and the JSON error body
//! - `router` - assembles the full application router

pub mod baked_good;
pub mod bakery;
pub mod error;
pub mod router;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use router::app_router;
pub use state::AppState;
