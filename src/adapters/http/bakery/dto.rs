//! HTTP DTOs for bakery endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::Bakery;

/// Form body for PATCH /bakeries/{id}.
///
/// The `name` field is optional; when absent the record is left untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBakeryRequest {
    pub name: Option<String>,
}

/// Serialized bakery.
///
/// Scalar fields only; the owned baked goods are never nested, so the
/// Bakery -> BakedGood -> Bakery cycle cannot occur.
#[derive(Debug, Clone, Serialize)]
pub struct BakeryResponse {
    pub id: i64,
    pub name: String,
    /// Creation time (ISO 8601).
    pub created_at: String,
}

impl From<&Bakery> for BakeryResponse {
    fn from(bakery: &Bakery) -> Self {
        Self {
            id: bakery.id().as_i64(),
            name: bakery.name().to_string(),
            created_at: bakery.created_at().to_rfc3339(),
        }
    }
}
