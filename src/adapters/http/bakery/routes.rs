//! Route configuration for bakery endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{get_bakery, list_bakeries, update_bakery};

/// Creates the bakery router.
///
/// Routes:
/// - `GET /bakeries` - List all bakeries
/// - `GET /bakeries/:id` - Fetch a bakery
/// - `PATCH /bakeries/:id` - Update the bakery name
pub fn bakery_router() -> Router<AppState> {
    Router::new()
        .route("/bakeries", get(list_bakeries))
        .route("/bakeries/:id", get(get_bakery).patch(update_bakery))
}
