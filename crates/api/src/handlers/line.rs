//! Handlers for the `/lines` resource.
//!
//! Every line response carries the line's stations in route order. The order
//! is rebuilt on each read from the line's stored sections.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::Json;
use serde::Serialize;
use subway_core::error::CoreError;
use subway_core::line::{validate_line_color, validate_line_name, validate_section_input};
use subway_core::types::{DbId, Timestamp};
use subway_db::models::line::{CreateLine, Line, UpdateLine};
use subway_db::models::section::{to_sections, CreateSection};
use subway_db::models::station::Station;
use subway_db::repositories::{LineRepo, SectionRepo, StationRepo};
use subway_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// A line together with its stations in route order.
#[derive(Debug, Serialize)]
pub struct LineResponse {
    pub id: DbId,
    pub name: String,
    pub color: String,
    /// Stations from the start of the line to its end, terminal included.
    pub stations: Vec<Station>,
    /// Sum of all section distances.
    pub distance: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

type Created<T> = (StatusCode, [(HeaderName, String); 1], Json<T>);

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_line(pool: &DbPool, id: DbId) -> AppResult<Line> {
    LineRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Line", id }))
}

/// Load the line's sections, resolve the station order, and attach stations.
async fn resolve_line(pool: &DbPool, line: Line) -> AppResult<LineResponse> {
    let rows = SectionRepo::list_by_line(pool, line.id).await?;
    let sections = to_sections(&rows);
    let order = sections.station_order().map_err(CoreError::from)?;

    let mut by_id: HashMap<DbId, Station> = StationRepo::find_by_ids(pool, &order)
        .await?
        .into_iter()
        .map(|station| (station.id, station))
        .collect();

    let stations = order
        .iter()
        .map(|id| {
            by_id.remove(id).ok_or_else(|| {
                AppError::InternalError(format!("Station {id} on line {} is missing", line.id))
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(LineResponse {
        id: line.id,
        name: line.name,
        color: line.color,
        stations,
        distance: sections.total_distance(),
        created_at: line.created_at,
        updated_at: line.updated_at,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /lines
///
/// Creates the line and its first section in one transaction.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLine>,
) -> AppResult<Created<LineResponse>> {
    validate_line_name(&input.name)?;
    validate_line_color(&input.color)?;
    validate_section_input(
        input.up_station_id,
        input.down_station_id,
        input.distance,
        input.duration,
    )?;

    let line = LineRepo::create(&state.pool, &input).await?;
    tracing::info!(line_id = line.id, name = %line.name, "Line created");

    let location = format!("/lines/{}", line.id);
    let response = resolve_line(&state.pool, line).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    ))
}

/// GET /lines
///
/// Fails as a whole if any line's stored sections do not resolve to a
/// single path; no partial listing is returned.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<LineResponse>>> {
    let lines = LineRepo::list(&state.pool).await?;

    let mut responses = Vec::with_capacity(lines.len());
    for line in lines {
        responses.push(resolve_line(&state.pool, line).await?);
    }
    Ok(Json(responses))
}

/// GET /lines/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<LineResponse>> {
    let line = find_line(&state.pool, id).await?;
    Ok(Json(resolve_line(&state.pool, line).await?))
}

/// PUT /lines/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLine>,
) -> AppResult<Json<LineResponse>> {
    if let Some(name) = &input.name {
        validate_line_name(name)?;
    }
    if let Some(color) = &input.color {
        validate_line_color(color)?;
    }

    let line = LineRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Line", id }))?;
    tracing::info!(line_id = line.id, "Line updated");

    Ok(Json(resolve_line(&state.pool, line).await?))
}

/// DELETE /lines/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = LineRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(line_id = id, "Line deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Line", id }))
    }
}

/// POST /lines/{id}/sections
///
/// Extends the line past its first or last station. The line row stays
/// locked from the placement check through the insert, so two extensions of
/// the same line cannot both plan against the same route.
pub async fn add_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateSection>,
) -> AppResult<Created<LineResponse>> {
    validate_section_input(
        input.up_station_id,
        input.down_station_id,
        input.distance,
        input.duration,
    )?;

    let mut tx = state.pool.begin().await?;
    let line = LineRepo::find_for_update(&mut *tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Line", id }))?;
    let rows = SectionRepo::list_by_line_inner(&mut *tx, line.id).await?;
    let extension = to_sections(&rows).plan_extension(&input.edge())?;

    let section = SectionRepo::create_inner(&mut *tx, line.id, &input).await?;
    tx.commit().await?;
    tracing::info!(
        line_id = line.id,
        section_id = section.id,
        ?extension,
        "Section added"
    );

    let location = format!("/lines/{}", line.id);
    let response = resolve_line(&state.pool, line).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    ))
}
