//! SQLite implementation of BakedGoodRepository.
//!
//! Price-ordered queries break ties on `id` so results follow insertion
//! order deterministically.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::error::ErrorKind;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;

use crate::domain::{BakedGood, BakedGoodId, BakeryId, DomainError, ErrorCode, NewBakedGood};
use crate::ports::BakedGoodRepository;

/// SQLite implementation of BakedGoodRepository.
#[derive(Clone)]
pub struct SqliteBakedGoodRepository {
    pool: SqlitePool,
}

impl SqliteBakedGoodRepository {
    /// Creates a new SqliteBakedGoodRepository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BakedGoodRepository for SqliteBakedGoodRepository {
    async fn create(&self, baked_good: &NewBakedGood) -> Result<BakedGood, DomainError> {
        let created_at = Utc::now();

        let row = sqlx::query(
            r#"
            INSERT INTO baked_goods (name, price, bakery_id, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&baked_good.name)
        .bind(baked_good.price)
        .bind(baked_good.bakery_id.as_i64())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error(e, baked_good.bakery_id))?;

        let id: i64 = row.get("id");
        Ok(BakedGood::reconstitute(
            BakedGoodId::from_i64(id),
            baked_good.name.clone(),
            baked_good.price,
            baked_good.bakery_id,
            created_at,
        ))
    }

    async fn find_by_id(&self, id: BakedGoodId) -> Result<Option<BakedGood>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, price, bakery_id, created_at
            FROM baked_goods WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to fetch baked good: {}", e))
        })?;

        Ok(row.map(row_to_baked_good))
    }

    async fn find_all(&self) -> Result<Vec<BakedGood>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price, bakery_id, created_at
            FROM baked_goods
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to fetch baked goods: {}", e))
        })?;

        Ok(rows.into_iter().map(row_to_baked_good).collect())
    }

    async fn find_all_by_price_desc(&self) -> Result<Vec<BakedGood>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price, bakery_id, created_at
            FROM baked_goods
            ORDER BY price DESC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to fetch baked goods: {}", e))
        })?;

        Ok(rows.into_iter().map(row_to_baked_good).collect())
    }

    async fn find_most_expensive(&self) -> Result<Option<BakedGood>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, price, bakery_id, created_at
            FROM baked_goods
            ORDER BY price DESC, id ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to fetch baked good: {}", e))
        })?;

        Ok(row.map(row_to_baked_good))
    }

    async fn delete(&self, id: BakedGoodId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM baked_goods WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Failed to delete baked good: {}", e))
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::BakedGoodNotFound,
                format!("Baked good not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn insert_error(e: sqlx::Error, bakery_id: BakeryId) -> DomainError {
    match &e {
        sqlx::Error::Database(db) if matches!(db.kind(), ErrorKind::ForeignKeyViolation) => {
            DomainError::new(
                ErrorCode::ForeignKeyViolation,
                format!("Bakery not found: {}", bakery_id),
            )
        }
        _ => DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to insert baked good: {}", e),
        ),
    }
}

fn row_to_baked_good(row: sqlx::sqlite::SqliteRow) -> BakedGood {
    let id: i64 = row.get("id");
    let name: String = row.get("name");
    let price: f64 = row.get("price");
    let bakery_id: i64 = row.get("bakery_id");
    let created_at: DateTime<Utc> = row.get("created_at");

    BakedGood::reconstitute(
        BakedGoodId::from_i64(id),
        name,
        price,
        BakeryId::from_i64(bakery_id),
        created_at,
    )
}
