//! Line entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use subway_core::types::{DbId, Timestamp};

/// A line row from the `lines` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Line {
    pub id: DbId,
    pub name: String,
    pub color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new line together with its first section.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLine {
    pub name: String,
    pub color: String,
    pub up_station_id: DbId,
    pub down_station_id: DbId,
    pub distance: i32,
    pub duration: Option<i32>,
}

/// DTO for renaming or recoloring a line. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLine {
    pub name: Option<String>,
    pub color: Option<String>,
}
