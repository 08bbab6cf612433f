use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use storefront_core::error::CoreError;
use storefront_core::resource::{
    duplicate_message, failure_message, missing_field_message, referenced_message, Operation,
    ResourceNames,
};
use storefront_db::{Entity, StoreError};

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent `{ "message", "code" }`
/// JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `storefront_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store call failed while serving `operation` on the named resource.
    #[error("failed to {operation} {}: {source}", .names.singular)]
    Store {
        names: ResourceNames,
        operation: Operation,
        #[source]
        source: StoreError,
    },

    /// The request path or body could not be extracted.
    #[error("rejected request: {message}")]
    Rejected { status: StatusCode, message: String },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Adapter for `map_err` that tags a [`StoreError`] with the resource and
    /// operation it came from.
    pub fn store<E: Entity>(operation: Operation) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Store {
            names: E::NAMES,
            operation,
            source,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core @ CoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
            }
            AppError::Store {
                names,
                operation,
                source,
            } => classify_store_error(names, *operation, source),
            AppError::Rejected { status, message } => (*status, "BAD_REQUEST", message.clone()),
        };

        let body = json!({
            "message": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a classified store failure onto an HTTP status, error code, and message.
///
/// - Foreign-key and unique violations map to 409.
/// - NOT NULL violations map to 400.
/// - An unreachable database maps to 503.
/// - Everything else maps to 500 with the resource's generic wording.
///
/// The underlying cause is logged, never returned.
fn classify_store_error(
    names: &ResourceNames,
    operation: Operation,
    err: &StoreError,
) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::ForeignKey { .. } => {
            tracing::warn!(error = %err, entity = names.singular, %operation, "Constraint violation");
            (
                StatusCode::CONFLICT,
                "CONSTRAINT_VIOLATION",
                referenced_message(operation, names),
            )
        }
        StoreError::Duplicate { .. } => {
            tracing::warn!(error = %err, entity = names.singular, %operation, "Duplicate row");
            (StatusCode::CONFLICT, "CONFLICT", duplicate_message(names))
        }
        StoreError::MissingValue { .. } => (
            StatusCode::BAD_REQUEST,
            "MISSING_FIELD",
            missing_field_message(names),
        ),
        StoreError::Unavailable(_) => {
            tracing::error!(error = %err, entity = names.singular, %operation, "Database unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                failure_message(operation, names),
            )
        }
        StoreError::Other(_) => {
            tracing::error!(error = %err, entity = names.singular, %operation, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                failure_message(operation, names),
            )
        }
    }
}
