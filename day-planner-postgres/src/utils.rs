use day_planner_db::repository::error::RepositoryError;
use std::error::Error;
use uuid::Uuid;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, RepositoryError>;
}

/// Maps a driver error onto the repository taxonomy.
///
/// A unique-key violation on insert is reported as `DuplicateId(id)`;
/// everything else means the store could not complete the operation.
pub fn store_error(err: sqlx::Error, id: Option<Uuid>) -> RepositoryError {
    if let (Some(id), Some(db_err)) = (id, err.as_database_error()) {
        if db_err.is_unique_violation() {
            return RepositoryError::DuplicateId(id);
        }
    }
    RepositoryError::StoreUnavailable(describe(&err))
}

fn describe(err: &sqlx::Error) -> String {
    match err.source() {
        Some(source) => format!("{err}: {source}"),
        None => err.to_string(),
    }
}
