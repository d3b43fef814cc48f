//! Repository for the `sections` table.

use sqlx::{PgConnection, PgPool};
use subway_core::types::DbId;

use crate::models::section::{CreateSection, Section};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, line_id, up_station_id, down_station_id, distance, duration, created_at";

/// Provides access to the directed sections of each line.
pub struct SectionRepo;

impl SectionRepo {
    /// Insert a section for `line_id`, returning the created row.
    ///
    /// Placement is not checked here; callers decide whether the section
    /// extends the line's route before inserting it.
    pub async fn create(
        pool: &PgPool,
        line_id: DbId,
        input: &CreateSection,
    ) -> Result<Section, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::create_inner(&mut *conn, line_id, input).await
    }

    /// Insert a section on an existing connection or transaction.
    pub async fn create_inner(
        conn: &mut PgConnection,
        line_id: DbId,
        input: &CreateSection,
    ) -> Result<Section, sqlx::Error> {
        let query = format!(
            "INSERT INTO sections (line_id, up_station_id, down_station_id, distance, duration)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(line_id)
            .bind(input.up_station_id)
            .bind(input.down_station_id)
            .bind(input.distance)
            .bind(input.duration)
            .fetch_one(conn)
            .await
    }

    /// All sections of a line, in storage order (not route order).
    pub async fn list_by_line(pool: &PgPool, line_id: DbId) -> Result<Vec<Section>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::list_by_line_inner(&mut *conn, line_id).await
    }

    /// List a line's sections on an existing connection or transaction.
    pub async fn list_by_line_inner(
        conn: &mut PgConnection,
        line_id: DbId,
    ) -> Result<Vec<Section>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sections WHERE line_id = $1 ORDER BY id");
        sqlx::query_as::<_, Section>(&query)
            .bind(line_id)
            .fetch_all(conn)
            .await
    }
}
