//! SQLite adapters - persistence implementations backed by sqlx.
//!
//! The store is a single local SQLite file (or an in-memory database in
//! tests). Foreign key enforcement is switched on per connection since SQLite
//! defaults to off.

mod baked_good_repository;
mod bakery_repository;

pub use baked_good_repository::SqliteBakedGoodRepository;
pub use bakery_repository::SqliteBakeryRepository;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;

/// Opens a connection pool for the configured SQLite database.
///
/// The database file is created if missing and foreign keys are enforced on
/// every connection.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_with(options)
        .await
}

/// Runs the embedded schema migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn connect_creates_missing_database_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bakery.db");
        let config = DatabaseConfig {
            url: format!("sqlite://{}", path.display()),
            ..Default::default()
        };

        let pool = connect(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();

        assert!(path.exists());
    }
}
