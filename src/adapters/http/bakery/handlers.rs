//! HTTP handlers for bakery endpoints.
//!
//! Pure glue: parse input, call the repository port, serialize, respond.

use axum::extract::{Form, Path, State};
use axum::response::{IntoResponse, Json};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::BakeryId;

use super::dto::{BakeryResponse, UpdateBakeryRequest};

/// GET /bakeries - List all bakeries.
pub async fn list_bakeries(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let bakeries = state.bakeries.find_all().await?;
    let body: Vec<BakeryResponse> = bakeries.iter().map(BakeryResponse::from).collect();
    Ok(Json(body))
}

/// GET /bakeries/{id} - Fetch a single bakery.
pub async fn get_bakery(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let bakery = state
        .bakeries
        .find_by_id(BakeryId::from_i64(id))
        .await?
        .ok_or_else(|| ApiError::NotFound("Bakery not found".to_string()))?;

    Ok(Json(BakeryResponse::from(&bakery)))
}

/// PATCH /bakeries/{id} - Update the bakery name from a form field.
///
/// A missing or empty `name` field leaves the record untouched; the current
/// state is returned either way.
pub async fn update_bakery(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(request): Form<UpdateBakeryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = BakeryId::from_i64(id);
    let bakery = state
        .bakeries
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Bakery not found".to_string()))?;

    let bakery = match request.name.filter(|name| !name.is_empty()) {
        Some(name) => state.bakeries.update_name(id, &name).await?,
        None => bakery,
    };

    Ok(Json(BakeryResponse::from(&bakery)))
}
