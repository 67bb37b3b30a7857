//! HTTP adapter for bakery endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::bakery_router;
