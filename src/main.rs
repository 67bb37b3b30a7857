//! Bakery API server binary

use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bakery_api::adapters::http::{app_router, AppState};
use bakery_api::adapters::sqlite::{self, SqliteBakedGoodRepository, SqliteBakeryRepository};
use bakery_api::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let pool = sqlite::connect(&config.database).await?;
    if config.database.run_migrations {
        sqlite::run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let state = AppState::new(
        Arc::new(SqliteBakeryRepository::new(pool.clone())),
        Arc::new(SqliteBakedGoodRepository::new(pool)),
    );

    let mut app = app_router(state).layer(TimeoutLayer::new(Duration::from_secs(
        config.server.request_timeout_secs,
    )));

    let mut origins: Vec<HeaderValue> = Vec::new();
    for origin in config.server.cors_origins_list() {
        match origin.parse() {
            Ok(value) => origins.push(value),
            Err(_) => tracing::warn!(%origin, "Skipping malformed CORS origin"),
        }
    }
    if !origins.is_empty() {
        app = app.layer(CorsLayer::new().allow_origin(AllowOrigin::list(origins)));
    }

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    // Machine-readable logs in production, human-readable elsewhere.
    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
