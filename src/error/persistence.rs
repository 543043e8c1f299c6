use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Save-time failure from the persistence store.
///
/// Produced by the unit of work when committing staged changes. Constraint
/// violations are classified where the driver reports them so tests and logs can
/// distinguish them; everything else (connectivity loss, conflicts, syntax-level
/// failures) stays a wrapped `DbErr`. All variants surface to clients as a
/// generic 500.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// A unique constraint rejected one of the staged changes.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint rejected one of the staged changes.
    ///
    /// Raised when an item references a missing category, and when deleting a
    /// category that still has items (restrict-on-delete policy).
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    /// Any other store failure: connectivity loss, conflict, check constraint.
    #[error(transparent)]
    Db(DbErr),
}

impl From<DbErr> for PersistenceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::UniqueViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::ForeignKeyViolation(msg),
            _ => Self::Db(err),
        }
    }
}
