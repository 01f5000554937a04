use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use prodgen_core::error::CoreError;
use prodgen_core::submission::{SubmissionError, FIELD_MOCKUP, FIELD_NAME_AND_SKU};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`SubmissionError`] for domain errors and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce consistent
/// JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `prodgen_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A rejected or failed draft submission.
    #[error(transparent)]
    Submission(#[from] SubmissionError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),

            AppError::Submission(err) => match err {
                SubmissionError::MissingRequiredField(field) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    missing_field_message(field),
                ),
                SubmissionError::Persistence(msg) => {
                    tracing::error!(error = %msg, "Product save failed");
                    (
                        StatusCode::BAD_GATEWAY,
                        "PERSISTENCE_ERROR",
                        format!("An error occurred while saving the product: {msg}"),
                    )
                }
                SubmissionError::NoProductId => {
                    tracing::error!("Product store returned no identifier");
                    (
                        StatusCode::BAD_GATEWAY,
                        "PERSISTENCE_ERROR",
                        format!("Failed to add product. {err}"),
                    )
                }
                SubmissionError::Core(core) => classify_core_error(core),
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
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

/// User-facing text for a missing required field.
fn missing_field_message(field: &str) -> String {
    match field {
        FIELD_NAME_AND_SKU => "Please fill in the Item Name and SKU fields.".to_string(),
        FIELD_MOCKUP => "Please select a mockup.".to_string(),
        other => format!("Please fill in the {other} field."),
    }
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Upstream(msg) => {
            tracing::warn!(error = %msg, "Upstream service error");
            (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", msg.clone())
        }
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
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
