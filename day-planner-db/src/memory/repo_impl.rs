use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::activity::ActivityModel;

/// Ephemeral activity store living for the lifetime of the process.
///
/// Records are kept in a map keyed by id behind a single lock. Every
/// lookup-then-mutate sequence runs under one write guard, so concurrent
/// updates and deletes cannot interleave. The guard is never held across an
/// `.await`.
#[derive(Debug, Default)]
pub struct InMemActivityRepository {
    pub(super) activities: RwLock<HashMap<Uuid, ActivityModel>>,
}

impl InMemActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store already holding `items`. A later item replaces an
    /// earlier one with the same id.
    pub fn with_activities(items: impl IntoIterator<Item = ActivityModel>) -> Self {
        let activities = items.into_iter().map(|item| (item.id, item)).collect();
        Self {
            activities: RwLock::new(activities),
        }
    }

    pub fn len(&self) -> usize {
        self.activities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.read().is_empty()
    }
}
