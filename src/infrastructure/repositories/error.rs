use crate::domain::errors::DomainError;

/// Translates sqlx failures into domain errors. SQLite reports the violated
/// constraint kind but not its name, and the only unique key on
/// `slugged_records` is `(scope, slug)`, so any unique violation is a lost
/// slug race.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                return DomainError::Conflict("slug already exists in scope".into());
            }
            if db_err.is_check_violation() {
                return DomainError::Validation("check constraint violated".into());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
