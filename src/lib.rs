//! Bakery API - HTTP CRUD service over bakeries and their baked goods.
//!
//! Exposes a small REST surface backed by a SQLite store: bakeries can be
//! listed, fetched, and renamed; baked goods can be created, listed (plain,
//! by descending price, or just the most expensive), fetched, and deleted.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
