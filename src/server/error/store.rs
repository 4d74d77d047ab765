use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failures reported by a student store.
///
/// Uniqueness collisions and vanished rows are split out of the generic database error
/// so the service can translate them into `Conflict` and `NotFound` responses.
#[derive(Error, Debug)]
pub enum StoreError {
    /// `student_code` or `email` already belongs to another record.
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// The addressed row no longer exists at write time.
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Any other database failure.
    #[error(transparent)]
    Db(DbErr),
}

/// Classifies a SeaORM error.
///
/// Uses the driver-independent `sql_err()` classification so the same mapping holds on
/// SQLite and any other backend SeaORM supports.
impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(detail) => return Self::RecordNotFound(detail.clone()),
            DbErr::RecordNotUpdated => return Self::RecordNotFound(err.to_string()),
            _ => {}
        }

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::UniqueViolation(detail),
            _ => Self::Db(err),
        }
    }
}
