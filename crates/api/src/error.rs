use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use subway_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `subway_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                // Lookups of unknown ids are client errors (400, not 404).
                CoreError::NotFound { entity, id } => (
                    StatusCode::BAD_REQUEST,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::MalformedSectionGraph(err) => {
                    tracing::error!(error = %err, "Stored sections do not form a single path");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "MALFORMED_SECTION_GRAPH",
                        err.to_string(),
                    )
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// PostgreSQL SQLSTATE codes for integrity constraint violations
/// (not-null, foreign key, unique, check).
const CONSTRAINT_VIOLATION_CODES: [&str; 4] = ["23502", "23503", "23505", "23514"];

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 400.
/// - Integrity constraint violations map to 400 with the database message.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::BAD_REQUEST,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err)
            if db_err
                .code()
                .is_some_and(|code| CONSTRAINT_VIOLATION_CODES.contains(&&*code)) =>
        {
            tracing::debug!(
                error = %db_err,
                constraint = db_err.constraint().unwrap_or("unknown"),
                "Constraint violation"
            );
            (
                StatusCode::BAD_REQUEST,
                "CONSTRAINT_VIOLATION",
                db_err.message().to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
