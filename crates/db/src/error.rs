//! Classification of database failures.
//!
//! The HTTP layer needs to know *why* a statement failed, not just that it
//! did: a dangling foreign key, a duplicate edge, and a dropped connection
//! each map to a different response. [`StoreError`] is built from
//! [`sqlx::Error`] at the repository boundary so nothing above this crate
//! inspects driver errors.

use sqlx::error::ErrorKind;
use sqlx::postgres::PgDatabaseError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// SQLSTATE 23503: the row is referenced elsewhere, or references a missing row.
    #[error("foreign key violation on {}", .constraint.as_deref().unwrap_or("unknown constraint"))]
    ForeignKey { constraint: Option<String> },

    /// SQLSTATE 23505.
    #[error("unique violation on {}", .constraint.as_deref().unwrap_or("unknown constraint"))]
    Duplicate { constraint: Option<String> },

    /// SQLSTATE 23502: a required column received `NULL`.
    #[error("null value in column {}", .column.as_deref().unwrap_or("unknown"))]
    MissingValue { column: Option<String> },

    /// The pool could not hand out a working connection.
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// Anything else the driver reported.
    #[error("database error: {0}")]
    Other(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => {
                let constraint = db_err.constraint().map(str::to_owned);
                match db_err.kind() {
                    ErrorKind::ForeignKeyViolation => StoreError::ForeignKey { constraint },
                    ErrorKind::UniqueViolation => StoreError::Duplicate { constraint },
                    ErrorKind::NotNullViolation => {
                        let column = db_err
                            .try_downcast_ref::<PgDatabaseError>()
                            .and_then(PgDatabaseError::column)
                            .map(str::to_owned);
                        StoreError::MissingValue { column }
                    }
                    _ => StoreError::Other(err),
                }
            }
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::WorkerCrashed => StoreError::Unavailable(err),
            _ => StoreError::Other(err),
        }
    }
}
