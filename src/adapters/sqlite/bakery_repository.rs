//! SQLite implementation of BakeryRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePool;
use sqlx::Row;

use crate::domain::{Bakery, BakeryId, DomainError, ErrorCode, NewBakery};
use crate::ports::BakeryRepository;

/// SQLite implementation of BakeryRepository.
#[derive(Clone)]
pub struct SqliteBakeryRepository {
    pool: SqlitePool,
}

impl SqliteBakeryRepository {
    /// Creates a new SqliteBakeryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BakeryRepository for SqliteBakeryRepository {
    async fn create(&self, bakery: &NewBakery) -> Result<Bakery, DomainError> {
        let created_at = Utc::now();

        let row = sqlx::query(
            r#"
            INSERT INTO bakeries (name, created_at)
            VALUES (?, ?)
            RETURNING id
            "#,
        )
        .bind(&bakery.name)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to insert bakery: {}", e))
        })?;

        let id: i64 = row.get("id");
        Ok(Bakery::reconstitute(
            BakeryId::from_i64(id),
            bakery.name.clone(),
            created_at,
        ))
    }

    async fn find_by_id(&self, id: BakeryId) -> Result<Option<Bakery>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM bakeries WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to fetch bakery: {}", e))
        })?;

        Ok(row.map(row_to_bakery))
    }

    async fn find_all(&self) -> Result<Vec<Bakery>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM bakeries
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to fetch bakeries: {}", e))
        })?;

        Ok(rows.into_iter().map(row_to_bakery).collect())
    }

    async fn update_name(&self, id: BakeryId, name: &str) -> Result<Bakery, DomainError> {
        let result = sqlx::query("UPDATE bakeries SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Failed to update bakery: {}", e))
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::BakeryNotFound,
                format!("Bakery not found: {}", id),
            ));
        }

        match self.find_by_id(id).await? {
            Some(bakery) => Ok(bakery),
            None => Err(DomainError::new(
                ErrorCode::BakeryNotFound,
                format!("Bakery not found: {}", id),
            )),
        }
    }
}

fn row_to_bakery(row: sqlx::sqlite::SqliteRow) -> Bakery {
    let id: i64 = row.get("id");
    let name: String = row.get("name");
    let created_at: DateTime<Utc> = row.get("created_at");

    Bakery::reconstitute(BakeryId::from_i64(id), name, created_at)
}
