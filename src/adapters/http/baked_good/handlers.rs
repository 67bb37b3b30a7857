//! HTTP handlers for baked good endpoints.
//!
//! Pure glue: parse input, call the repository port, serialize, respond.

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::{BakedGoodId, BakeryId, NewBakedGood};

use super::dto::{BakedGoodResponse, CreateBakedGoodRequest, MessageResponse};

/// GET /baked_goods - List all baked goods.
pub async fn list_baked_goods(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let baked_goods = state.baked_goods.find_all().await?;
    let body: Vec<BakedGoodResponse> = baked_goods.iter().map(BakedGoodResponse::from).collect();
    Ok(Json(body))
}

/// GET /baked_goods/by_price - List baked goods by price descending.
pub async fn list_baked_goods_by_price(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let baked_goods = state.baked_goods.find_all_by_price_desc().await?;
    let body: Vec<BakedGoodResponse> = baked_goods.iter().map(BakedGoodResponse::from).collect();
    Ok(Json(body))
}

/// GET /baked_goods/most_expensive - Fetch the single most expensive baked good.
///
/// An empty store yields 404 rather than a crash.
pub async fn get_most_expensive_baked_good(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let baked_good = state
        .baked_goods
        .find_most_expensive()
        .await?
        .ok_or_else(|| ApiError::NotFound("Baked good not found".to_string()))?;

    Ok(Json(BakedGoodResponse::from(&baked_good)))
}

/// GET /baked_goods/{id} - Fetch a single baked good.
pub async fn get_baked_good(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let baked_good = state
        .baked_goods
        .find_by_id(BakedGoodId::from_i64(id))
        .await?
        .ok_or_else(|| ApiError::NotFound("Baked good not found".to_string()))?;

    Ok(Json(BakedGoodResponse::from(&baked_good)))
}

/// POST /baked_goods - Create a baked good from form fields.
pub async fn create_baked_good(
    State(state): State<AppState>,
    Form(request): Form<CreateBakedGoodRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Empty strings count as missing, matching form semantics.
    let name = request.name.filter(|s| !s.is_empty());
    let price = request.price.filter(|s| !s.is_empty());
    let bakery_id = request.bakery_id.filter(|s| !s.is_empty());

    let (Some(name), Some(price), Some(bakery_id)) = (name, price, bakery_id) else {
        return Err(ApiError::BadRequest("Missing required fields".to_string()));
    };

    let price: f64 = price
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid price".to_string()))?;
    let bakery_id: BakeryId = bakery_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid bakery_id".to_string()))?;

    let input = NewBakedGood::new(name, price, bakery_id)?;
    let baked_good = state.baked_goods.create(&input).await?;

    Ok((StatusCode::CREATED, Json(BakedGoodResponse::from(&baked_good))))
}

/// DELETE /baked_goods/{id} - Delete a baked good.
pub async fn delete_baked_good(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.baked_goods.delete(BakedGoodId::from_i64(id)).await?;

    Ok(Json(MessageResponse {
        message: "Baked good successfully deleted".to_string(),
    }))
}
