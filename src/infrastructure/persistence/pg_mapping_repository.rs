//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::errors::StoreError;
use crate::domain::repositories::{MappingPageRows, MappingRepository};
use crate::utils::db_error::is_unique_violation_on_code;

const MAPPING_COLUMNS: &str =
    "id, short_code, target_url, created_at, expires_at, is_active, click_count, is_custom_alias";

#[derive(Debug, sqlx::FromRow)]
struct MappingRow {
    id: i64,
    short_code: String,
    target_url: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    is_active: bool,
    click_count: i64,
    is_custom_alias: bool,
}

impl From<MappingRow> for Mapping {
    fn from(row: MappingRow) -> Self {
        Mapping {
            id: row.id,
            short_code: row.short_code,
            target_url: row.target_url,
            created_at: row.created_at,
            expires_at: row.expires_at,
            is_active: row.is_active,
            click_count: row.click_count,
            is_custom_alias: row.is_custom_alias,
        }
    }
}

/// PostgreSQL repository for mappings.
///
/// Uniqueness rides on the `mappings_short_code_key` constraint, and every
/// mutation is a single statement, so no explicit locking is needed.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Finds a mapping by code regardless of its active flag.
    ///
    /// Operator-only lookup; the service never resolves inactive mappings.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, StoreError> {
        let sql = format!("SELECT {MAPPING_COLUMNS} FROM mappings WHERE short_code = $1");

        let row = sqlx::query_as::<_, MappingRow>(&sql)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Mapping::from))
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn exists(&self, code: &str) -> Result<bool, StoreError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM mappings WHERE short_code = $1)")
                .bind(code)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn insert_if_absent(&self, new_mapping: NewMapping) -> Result<Mapping, StoreError> {
        let sql = format!(
            r#"
            INSERT INTO mappings (short_code, target_url, created_at, expires_at, is_active, click_count, is_custom_alias)
            VALUES ($1, $2, $3, $4, TRUE, 0, $5)
            ON CONFLICT (short_code) DO NOTHING
            RETURNING {MAPPING_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, MappingRow>(&sql)
            .bind(&new_mapping.short_code)
            .bind(&new_mapping.target_url)
            .bind(new_mapping.created_at)
            .bind(new_mapping.expires_at)
            .bind(new_mapping.is_custom_alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation_on_code(&e) {
                    StoreError::Conflict(new_mapping.short_code.clone())
                } else {
                    StoreError::from(e)
                }
            })?;

        row.map(Mapping::from)
            .ok_or(StoreError::Conflict(new_mapping.short_code))
    }

    async fn find_active_by_code(&self, code: &str) -> Result<Option<Mapping>, StoreError> {
        let sql = format!(
            "SELECT {MAPPING_COLUMNS} FROM mappings WHERE short_code = $1 AND is_active"
        );

        let row = sqlx::query_as::<_, MappingRow>(&sql)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Mapping::from))
    }

    async fn increment_clicks(&self, id: i64) -> Result<Mapping, StoreError> {
        let sql = format!(
            r#"
            UPDATE mappings
            SET click_count = click_count + 1
            WHERE id = $1
            RETURNING {MAPPING_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, MappingRow>(&sql)
            .bind(id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn deactivate(&self, id: i64) -> Result<Mapping, StoreError> {
        let sql = format!(
            r#"
            UPDATE mappings
            SET is_active = FALSE
            WHERE id = $1
            RETURNING {MAPPING_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, MappingRow>(&sql)
            .bind(id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn list_active_page(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<MappingPageRows, StoreError> {
        // Page and count come from one snapshot.
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let sql = format!(
            r#"
            SELECT {MAPPING_COLUMNS}
            FROM mappings
            WHERE is_active
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#
        );

        let rows = sqlx::query_as::<_, MappingRow>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *tx)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM mappings WHERE is_active")
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(MappingPageRows {
            items: rows.into_iter().map(Mapping::from).collect(),
            total,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
