use day_planner_api::ApiError;
use thiserror::Error;
use uuid::Uuid;

/// Failures a repository can report.
///
/// Absence on read paths is not an error: `find_by_id` answers `Ok(None)`.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("No record with id {0}")]
    NotFound(Uuid),

    #[error("A record with id {0} already exists")]
    DuplicateId(Uuid),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// A stored document could not be turned back into an entity
    #[error("Corrupt record {id}: {reason}")]
    Corrupt { id: String, reason: String },
}

impl RepositoryError {
    /// Whether retrying the same operation may succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, RepositoryError::StoreUnavailable(_))
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => ApiError::NotFound(format!("activity {id}")),
            RepositoryError::StoreUnavailable(reason) => ApiError::StoreUnavailable(reason),
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
