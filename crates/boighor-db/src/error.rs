//! # Database Error Types
//!
//! Error types for remote-call failures.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  Postgres error (sqlx::Error)                                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DbError (this module) ← categorized by SQLSTATE                    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Admin UI matches on the variant and renders a message              │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No operation retries; every failure is terminal for that call.

use thiserror::Error;

/// Remote-call errors.
///
/// These wrap sqlx errors and categorize them so callers can match
/// exhaustively instead of inspecting message strings.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found.
    ///
    /// Returned when a single-row expectation matches nothing, or when an
    /// update/delete touches zero rows.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation (e.g. duplicate admin email).
    #[error("Duplicate value for constraint '{constraint}'")]
    UniqueViolation { constraint: String },

    /// Foreign key constraint violation.
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Could not reach or keep a connection to the backend.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound     → DbError::NotFound
/// sqlx::Error::Database        → SQLSTATE 23505 → UniqueViolation
///                                SQLSTATE 23503 → ForeignKeyViolation
///                                other          → QueryFailed
/// sqlx::Error::PoolTimedOut    → DbError::PoolExhausted
/// sqlx::Error::PoolClosed/Io   → DbError::ConnectionFailed
/// Other                        → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23505") => DbError::UniqueViolation {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                },
                Some("23503") => DbError::ForeignKeyViolation {
                    message: db_err.message().to_string(),
                },
                _ => DbError::QueryFailed(db_err.message().to_string()),
            },

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            sqlx::Error::Io(io_err) => DbError::ConnectionFailed(io_err.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DbError::not_found("Book", "b4d0c0de");
        assert_eq!(err.to_string(), "Book not found: b4d0c0de");
    }

    #[test]
    fn test_unique_violation_message() {
        let err = DbError::UniqueViolation {
            constraint: "admins_email_key".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicate value for constraint 'admins_email_key'"
        );
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[test]
    fn test_pool_timeout_maps_to_exhausted() {
        let err: DbError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DbError::PoolExhausted));
    }
}
