//! HTTP adapter for baked good endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::baked_good_router;
