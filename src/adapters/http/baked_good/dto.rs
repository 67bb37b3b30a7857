//! HTTP DTOs for baked good endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::BakedGood;

/// Form body for POST /baked_goods.
///
/// All fields arrive as strings (form encoding); presence and numeric
/// validity are checked in the handler so a missing field maps to 400
/// rather than an extractor rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBakedGoodRequest {
    pub name: Option<String>,
    pub price: Option<String>,
    pub bakery_id: Option<String>,
}

/// Serialized baked good.
///
/// Scalar fields plus the owning bakery's id; the bakery itself is never
/// nested, so serialization cannot recurse.
#[derive(Debug, Clone, Serialize)]
pub struct BakedGoodResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
    /// Creation time (ISO 8601).
    pub created_at: String,
}

impl From<&BakedGood> for BakedGoodResponse {
    fn from(baked_good: &BakedGood) -> Self {
        Self {
            id: baked_good.id().as_i64(),
            name: baked_good.name().to_string(),
            price: baked_good.price(),
            bakery_id: baked_good.bakery_id().as_i64(),
            created_at: baked_good.created_at().to_rfc3339(),
        }
    }
}

/// Confirmation body for DELETE /baked_goods/{id}.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BakedGoodId, BakeryId};
    use chrono::Utc;

    #[test]
    fn baked_good_response_includes_foreign_key_id_only() {
        let baked_good = BakedGood::reconstitute(
            BakedGoodId::from_i64(3),
            "Croissant".to_string(),
            3.5,
            BakeryId::from_i64(1),
            Utc::now(),
        );
        let response = BakedGoodResponse::from(&baked_good);

        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert!(object.contains_key("created_at"));
        assert_eq!(value["id"], 3);
        assert_eq!(value["bakery_id"], 1);
        assert_eq!(value["price"], 3.5);
    }

    #[test]
    fn create_request_tolerates_missing_fields() {
        let req: CreateBakedGoodRequest =
            serde_urlencoded::from_str("name=Croissant&bakery_id=1").unwrap();
        assert_eq!(req.name.as_deref(), Some("Croissant"));
        assert!(req.price.is_none());
        assert_eq!(req.bakery_id.as_deref(), Some("1"));
    }
}
