pub mod health;
pub mod line;
pub mod station;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                   admin web page
///
/// /lines                              list, create
/// /lines/{id}                         get, update, delete
/// /lines/{id}/sections                add section (POST)
///
/// /stations                           list, create
/// /stations/{id}                      get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Admin web page.
        .route("/", get(handlers::web::index))
        // Lines with their resolved station order.
        .nest("/lines", line::router())
        // Stations.
        .nest("/stations", station::router())
}
