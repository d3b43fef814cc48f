//! Repository for the `lines` table.

use sqlx::{PgConnection, PgPool};
use subway_core::types::DbId;

use crate::models::line::{CreateLine, Line, UpdateLine};
use crate::models::section::CreateSection;
use crate::repositories::SectionRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, color, created_at, updated_at";

/// Provides CRUD operations for lines.
pub struct LineRepo;

impl LineRepo {
    /// Insert a new line and its first section in one transaction,
    /// returning the created line.
    pub async fn create(pool: &PgPool, input: &CreateLine) -> Result<Line, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO lines (name, color) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let line = sqlx::query_as::<_, Line>(&query)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_one(&mut *tx)
            .await?;

        let first_section = CreateSection {
            up_station_id: input.up_station_id,
            down_station_id: input.down_station_id,
            distance: input.distance,
            duration: input.duration,
        };
        SectionRepo::create_inner(&mut *tx, line.id, &first_section).await?;

        tx.commit().await?;
        tracing::debug!(line_id = line.id, "Line created with first section");
        Ok(line)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Line>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lines WHERE id = $1");
        sqlx::query_as::<_, Line>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a line and hold a row lock on it until the transaction ends.
    ///
    /// Concurrent changes to the same line's sections serialize on this lock,
    /// so each one sees the route the previous one committed.
    pub async fn find_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Line>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lines WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Line>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List all lines ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Line>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lines ORDER BY id");
        sqlx::query_as::<_, Line>(&query).fetch_all(pool).await
    }

    /// Update a line. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLine,
    ) -> Result<Option<Line>, sqlx::Error> {
        let query = format!(
            "UPDATE lines SET
                name = COALESCE($2, name),
                color = COALESCE($3, color)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Line>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Delete a line and, by cascade, its sections. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lines WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
