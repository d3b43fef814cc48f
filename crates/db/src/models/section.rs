//! Section entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use subway_core::sections;
use subway_core::types::{DbId, Timestamp};

/// A section row from the `sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Section {
    pub id: DbId,
    pub line_id: DbId,
    pub up_station_id: DbId,
    pub down_station_id: DbId,
    pub distance: i32,
    pub duration: Option<i32>,
    pub created_at: Timestamp,
}

impl Section {
    /// The directed edge this row stores, detached from its line.
    pub fn edge(&self) -> sections::Section {
        sections::Section {
            up_station_id: self.up_station_id,
            down_station_id: self.down_station_id,
            distance: self.distance,
            duration: self.duration,
        }
    }
}

/// Collect stored rows into the snapshot the route resolver walks.
pub fn to_sections(rows: &[Section]) -> sections::Sections {
    sections::Sections::new(rows.iter().map(Section::edge).collect())
}

/// DTO for adding a section to an existing line.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSection {
    pub up_station_id: DbId,
    pub down_station_id: DbId,
    pub distance: i32,
    pub duration: Option<i32>,
}

impl CreateSection {
    pub fn edge(&self) -> sections::Section {
        sections::Section {
            up_station_id: self.up_station_id,
            down_station_id: self.down_station_id,
            distance: self.distance,
            duration: self.duration,
        }
    }
}
