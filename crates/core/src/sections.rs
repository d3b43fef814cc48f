//! Route reconstruction for a line's sections.
//!
//! A line stores its sections as an unordered set of directed edges
//! (`up_station_id -> down_station_id`). [`Sections`] holds an immutable
//! snapshot of those edges and walks them from the line's start station to
//! its end, rejecting any edge set that is not a single simple path.

use std::collections::{HashMap, HashSet};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One directed, distance-weighted segment of track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub up_station_id: DbId,
    pub down_station_id: DbId,
    pub distance: i32,
    pub duration: Option<i32>,
}

impl Section {
    pub fn new(up_station_id: DbId, down_station_id: DbId, distance: i32) -> Self {
        Self {
            up_station_id,
            down_station_id,
            distance,
            duration: None,
        }
    }
}

/// Ways in which a set of sections fails to form a single simple path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionGraphError {
    #[error("line has no sections")]
    Empty,

    #[error("section starts and ends at station {0}")]
    SelfLoop(DbId),

    #[error("station {0} is the up-station of more than one section")]
    Branching(DbId),

    #[error("station {0} is the down-station of more than one section")]
    Merging(DbId),

    #[error("no start station: every up-station is also a down-station")]
    NoStartStation,

    #[error("multiple start stations: {0:?}")]
    MultipleStartStations(Vec<DbId>),

    #[error("walk from the start station reached {reached} of {total} sections")]
    Disconnected { reached: usize, total: usize },
}

/// Where a new section attaches to an existing route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    /// The new section ends at the current start station.
    Prepend,
    /// The new section begins at the current end station.
    Append,
}

/// Unordered snapshot of the sections belonging to one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    sections: Vec<Section>,
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

impl Sections {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sum of all section distances.
    pub fn total_distance(&self) -> i64 {
        self.sections.iter().map(|s| i64::from(s.distance)).sum()
    }

    pub fn contains_station(&self, station_id: DbId) -> bool {
        self.sections
            .iter()
            .any(|s| s.up_station_id == station_id || s.down_station_id == station_id)
    }

    /// Return the sections in route order, from the start station onward.
    ///
    /// The start station is the only up-station that never appears as a
    /// down-station. Every station may be the up-station of at most one
    /// section and the down-station of at most one section, and the walk
    /// from the start must cover every section.
    pub fn ordered(&self) -> Result<Vec<&Section>, SectionGraphError> {
        if self.is_empty() {
            return Err(SectionGraphError::Empty);
        }

        let total = self.len();
        let mut successors: HashMap<DbId, &Section> = HashMap::with_capacity(total);
        let mut down_ids: HashSet<DbId> = HashSet::with_capacity(total);

        for section in &self.sections {
            if section.up_station_id == section.down_station_id {
                return Err(SectionGraphError::SelfLoop(section.up_station_id));
            }
            if successors.insert(section.up_station_id, section).is_some() {
                return Err(SectionGraphError::Branching(section.up_station_id));
            }
            if !down_ids.insert(section.down_station_id) {
                return Err(SectionGraphError::Merging(section.down_station_id));
            }
        }

        let mut starts: Vec<DbId> = successors
            .keys()
            .copied()
            .filter(|id| !down_ids.contains(id))
            .collect();
        starts.sort_unstable();

        if starts.len() > 1 {
            return Err(SectionGraphError::MultipleStartStations(starts));
        }
        let Some(&start) = starts.first() else {
            return Err(SectionGraphError::NoStartStation);
        };

        // Down-stations are unique and the start is never a down-station,
        // so the walk cannot revisit a station.
        let mut route = Vec::with_capacity(total);
        let mut current = start;
        while let Some(section) = successors.get(&current) {
            route.push(*section);
            current = section.down_station_id;
        }

        if route.len() != total {
            return Err(SectionGraphError::Disconnected {
                reached: route.len(),
                total,
            });
        }

        Ok(route)
    }

    /// Return station ids in route order, terminal station included.
    ///
    /// The result always holds `len() + 1` distinct ids.
    pub fn station_order(&self) -> Result<Vec<DbId>, SectionGraphError> {
        let route = self.ordered()?;

        let mut stations: Vec<DbId> = route.iter().map(|s| s.up_station_id).collect();
        if let Some(last) = route.last() {
            stations.push(last.down_station_id);
        }
        Ok(stations)
    }

    /// Decide where `candidate` attaches to the current route.
    ///
    /// A section may only extend the line past one of its termini: it must
    /// share exactly one station with the line, and that station must be the
    /// first station (for a prepend) or the last station (for an append).
    pub fn plan_extension(&self, candidate: &Section) -> Result<Extension, CoreError> {
        let order = self.station_order()?;
        let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
            return Err(CoreError::Internal(
                "resolved route has no stations".to_string(),
            ));
        };

        let up_on_line = self.contains_station(candidate.up_station_id);
        let down_on_line = self.contains_station(candidate.down_station_id);

        match (up_on_line, down_on_line) {
            (true, true) => Err(CoreError::Validation(format!(
                "Stations {} and {} are both already on the line",
                candidate.up_station_id, candidate.down_station_id
            ))),
            (false, false) => Err(CoreError::Validation(format!(
                "Section {} -> {} shares no station with the line",
                candidate.up_station_id, candidate.down_station_id
            ))),
            (true, false) if candidate.up_station_id == last => Ok(Extension::Append),
            (false, true) if candidate.down_station_id == first => Ok(Extension::Prepend),
            _ => Err(CoreError::Validation(format!(
                "Section {} -> {} must attach to the first ({first}) or last ({last}) station",
                candidate.up_station_id, candidate.down_station_id
            ))),
        }
    }
}

impl From<Vec<Section>> for Sections {
    fn from(sections: Vec<Section>) -> Self {
        Self::new(sections)
    }
}
