//! Route definitions for the `/lines` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::line;
use crate::state::AppState;

/// Routes mounted at `/lines`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// POST   /{id}/sections    -> add_section
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(line::list).post(line::create))
        .route(
            "/{id}",
            get(line::get_by_id).put(line::update).delete(line::delete),
        )
        .route("/{id}/sections", post(line::add_section))
}
