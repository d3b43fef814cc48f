//! Handlers for the `/stations` resource.

use axum::extract::{Path, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::Json;
use subway_core::error::CoreError;
use subway_core::line::validate_station_name;
use subway_core::types::DbId;
use subway_db::models::station::{CreateStation, Station};
use subway_db::repositories::StationRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /stations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStation>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Station>)> {
    validate_station_name(&input.name)?;

    let station = StationRepo::create(&state.pool, &input).await?;
    tracing::info!(station_id = station.id, name = %station.name, "Station created");

    let location = format!("/stations/{}", station.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(station),
    ))
}

/// GET /stations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Station>>> {
    let stations = StationRepo::list(&state.pool).await?;
    Ok(Json(stations))
}

/// GET /stations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Station>> {
    let station = StationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Station",
            id,
        }))?;
    Ok(Json(station))
}

/// DELETE /stations/{id}
///
/// Stations still referenced by a section are rejected by the database.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = StationRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(station_id = id, "Station deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Station",
            id,
        }))
    }
}
