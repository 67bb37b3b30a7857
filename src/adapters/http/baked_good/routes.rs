//! Route configuration for baked good endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{
    create_baked_good, delete_baked_good, get_baked_good, get_most_expensive_baked_good,
    list_baked_goods, list_baked_goods_by_price,
};

/// Creates the baked good router.
///
/// Routes:
/// - `GET /baked_goods` - List all baked goods
/// - `POST /baked_goods` - Create a baked good from form fields
/// - `GET /baked_goods/by_price` - List baked goods by price descending
/// - `GET /baked_goods/most_expensive` - Fetch the most expensive baked good
/// - `GET /baked_goods/:id` - Fetch a baked good
/// - `DELETE /baked_goods/:id` - Delete a baked good
pub fn baked_good_router() -> Router<AppState> {
    Router::new()
        .route("/baked_goods", get(list_baked_goods).post(create_baked_good))
        .route("/baked_goods/by_price", get(list_baked_goods_by_price))
        .route("/baked_goods/most_expensive", get(get_most_expensive_baked_good))
        .route("/baked_goods/:id", get(get_baked_good).delete(delete_baked_good))
}
