//! Database error types
//!
//! Repositories report [`DatabaseError`]; adapters translate it into the
//! port-level [`PortError`] before it reaches a service.

use thiserror::Error;

use core_kernel::{EntityKind, PortError};

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// No row matched the given identity
    #[error("{entity} with id '{id}' not found")]
    NotFound {
        entity: EntityKind,
        id: String,
    },

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Foreign key constraint violation
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Check constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Migration error
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// No connection became available before the acquire timeout
    #[error("Connection pool exhausted")]
    PoolExhausted,
}

impl DatabaseError {
    /// Creates a not found error for an entity kind and identifier
    ///
    /// ```rust
    /// use core_kernel::EntityKind;
    /// use infra_db::DatabaseError;
    ///
    /// let error = DatabaseError::not_found(EntityKind::Policy, 12);
    /// assert_eq!(error.to_string(), "Policy with id '12' not found");
    /// ```
    pub fn not_found(entity: EntityKind, id: impl std::fmt::Display) -> Self {
        DatabaseError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, DatabaseError::NotFound { .. })
    }

    /// Checks if this error is a constraint violation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DatabaseError::DuplicateEntry(_)
                | DatabaseError::ForeignKeyViolation(_)
                | DatabaseError::ConstraintViolation(_)
        )
    }

    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }

    /// Translates a failed insert whose parent row is gone into `NotFound`
    /// for that parent; every other error converts as usual.
    pub(crate) fn into_port_error_for_parent(self, parent: EntityKind, parent_id: impl std::fmt::Display) -> PortError {
        match self {
            DatabaseError::ForeignKeyViolation(_) => PortError::not_found(parent, parent_id),
            other => other.into(),
        }
    }
}

/// Maps SQLx errors onto the variants above using the PostgreSQL error code
///
/// See <https://www.postgresql.org/docs/current/errcodes-appendix.html>
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::Io(e) => DatabaseError::ConnectionFailed(e.to_string()),
            sqlx::Error::PoolClosed => DatabaseError::ConnectionFailed("pool closed".to_string()),
            sqlx::Error::Database(db_err) => {
                let message = db_err.message().to_string();
                match db_err.code().as_deref() {
                    Some("23505") => DatabaseError::DuplicateEntry(message),
                    Some("23503") => DatabaseError::ForeignKeyViolation(message),
                    Some("23514") => DatabaseError::ConstraintViolation(message),
                    _ => DatabaseError::QueryFailed(message),
                }
            }
            other => DatabaseError::QueryFailed(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DatabaseError {
    fn from(error: sqlx::migrate::MigrateError) -> Self {
        DatabaseError::MigrationFailed(error.to_string())
    }
}

impl From<DatabaseError> for PortError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::NotFound { entity, id } => PortError::NotFound { entity, id },
            DatabaseError::DuplicateEntry(message)
            | DatabaseError::ForeignKeyViolation(message)
            | DatabaseError::ConstraintViolation(message) => PortError::conflict(message),
            e @ (DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted) => {
                PortError::Connection {
                    message: e.to_string(),
                    source: Some(Box::new(e)),
                }
            }
            e => PortError::Internal {
                message: e.to_string(),
                source: Some(Box::new(e)),
            },
        }
    }
}
