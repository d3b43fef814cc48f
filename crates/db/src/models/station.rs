//! Station entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use subway_core::types::{DbId, Timestamp};

/// A station row from the `stations` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Station {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new station.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStation {
    pub name: String,
}
