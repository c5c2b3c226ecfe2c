use std::sync::Arc;

use crate::retry::RetryPolicy;
use crate::utils::TryFromRow;
use day_planner_db::models::activity::ActivityModel;
use day_planner_db::repository::error::RepositoryError;
use sqlx::types::Json;
use sqlx::{postgres::PgRow, PgPool, Row};

use super::document::ActivityDocument;

pub(super) const SELECT_ALL: &str = "SELECT id, document FROM activities";
pub(super) const SELECT_BY_ID: &str = "SELECT id, document FROM activities WHERE id = $1";
pub(super) const INSERT: &str = "INSERT INTO activities (id, document) VALUES ($1, $2)";
pub(super) const REPLACE: &str = "UPDATE activities SET document = $2 WHERE id = $1";
pub(super) const DELETE: &str = "DELETE FROM activities WHERE id = $1";

/// Durable activity store on PostgreSQL, one JSONB document per activity.
///
/// Each operation is an independent round trip through the pool; nothing
/// spans two operations.
pub struct ActivityRepositoryImpl {
    pub pool: Arc<PgPool>,
    pub retry: RetryPolicy,
}

impl ActivityRepositoryImpl {
    pub fn new(pool: Arc<PgPool>, retry: RetryPolicy) -> Self {
        Self { pool, retry }
    }
}

impl TryFromRow<PgRow> for ActivityModel {
    fn try_from_row(row: &PgRow) -> Result<Self, RepositoryError> {
        let key: String = row
            .try_get("id")
            .map_err(|e| RepositoryError::StoreUnavailable(e.to_string()))?;
        let Json(document): Json<ActivityDocument> =
            row.try_get("document").map_err(|e| RepositoryError::Corrupt {
                id: key.clone(),
                reason: e.to_string(),
            })?;
        if document.id != key {
            return Err(RepositoryError::Corrupt {
                id: key,
                reason: format!("document carries id {}", document.id),
            });
        }
        document.into_model()
    }
}
