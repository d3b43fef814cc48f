//! Repository for the `stations` table.

use sqlx::PgPool;
use subway_core::types::DbId;

use crate::models::station::{CreateStation, Station};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides CRUD operations for stations.
pub struct StationRepo;

impl StationRepo {
    /// Insert a new station, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStation) -> Result<Station, sqlx::Error> {
        let query = format!("INSERT INTO stations (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Station>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Station>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stations WHERE id = $1");
        sqlx::query_as::<_, Station>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch every station whose id is in `ids`, in no particular order.
    ///
    /// Ids with no matching row are silently skipped; callers that need all
    /// of them must compare the result length.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Station>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stations WHERE id = ANY($1)");
        sqlx::query_as::<_, Station>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List all stations ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Station>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stations ORDER BY id");
        sqlx::query_as::<_, Station>(&query).fetch_all(pool).await
    }

    /// Delete a station by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while any section references it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
