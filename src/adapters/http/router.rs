//! Application router assembly.

use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::baked_good::baked_good_router;
use super::bakery::bakery_router;
use super::state::AppState;

/// Builds the full application router.
///
/// Mounts the informational root route and both entity routers, with
/// request tracing on every route.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .merge(bakery_router())
        .merge(baked_good_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - Static informational page.
async fn home() -> Html<&'static str> {
    Html("<h1>Bakery GET-POST-PATCH-DELETE API</h1>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        BakedGood, BakedGoodId, Bakery, BakeryId, DomainError, NewBakedGood, NewBakery,
    };
    use crate::ports::{BakedGoodRepository, BakeryRepository};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct EmptyBakeryRepository;

    #[async_trait]
    impl BakeryRepository for EmptyBakeryRepository {
        async fn create(&self, bakery: &NewBakery) -> Result<Bakery, DomainError> {
            Ok(Bakery::reconstitute(
                BakeryId::from_i64(1),
                bakery.name.clone(),
                Utc::now(),
            ))
        }
        async fn find_by_id(&self, _id: BakeryId) -> Result<Option<Bakery>, DomainError> {
            Ok(None)
        }
        async fn find_all(&self) -> Result<Vec<Bakery>, DomainError> {
            Ok(vec![])
        }
        async fn update_name(&self, id: BakeryId, name: &str) -> Result<Bakery, DomainError> {
            Ok(Bakery::reconstitute(id, name.to_string(), Utc::now()))
        }
    }

    struct EmptyBakedGoodRepository;

    #[async_trait]
    impl BakedGoodRepository for EmptyBakedGoodRepository {
        async fn create(&self, baked_good: &NewBakedGood) -> Result<BakedGood, DomainError> {
            Ok(BakedGood::reconstitute(
                BakedGoodId::from_i64(1),
                baked_good.name.clone(),
                baked_good.price,
                baked_good.bakery_id,
                Utc::now(),
            ))
        }
        async fn find_by_id(&self, _id: BakedGoodId) -> Result<Option<BakedGood>, DomainError> {
            Ok(None)
        }
        async fn find_all(&self) -> Result<Vec<BakedGood>, DomainError> {
            Ok(vec![])
        }
        async fn find_all_by_price_desc(&self) -> Result<Vec<BakedGood>, DomainError> {
            Ok(vec![])
        }
        async fn find_most_expensive(&self) -> Result<Option<BakedGood>, DomainError> {
            Ok(None)
        }
        async fn delete(&self, _id: BakedGoodId) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn test_app() -> Router {
        app_router(AppState::new(
            Arc::new(EmptyBakeryRepository),
            Arc::new(EmptyBakedGoodRepository),
        ))
    }

    #[tokio::test]
    async fn home_returns_informational_html() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("Bakery GET-POST-PATCH-DELETE API"));
    }

    #[tokio::test]
    async fn both_entity_routers_are_mounted() {
        let response = test_app()
            .oneshot(Request::builder().uri("/bakeries").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = test_app()
            .oneshot(Request::builder().uri("/baked_goods").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let response = test_app()
            .oneshot(Request::builder().uri("/cookies").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
