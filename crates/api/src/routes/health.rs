use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Payload of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// `up` or `down`.
    pub database: &'static str,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let (status, database) = match subway_db::health_check(&state.pool).await {
        Ok(()) => ("ok", "up"),
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            ("degraded", "down")
        }
    };

    Json(HealthResponse {
        status,
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
