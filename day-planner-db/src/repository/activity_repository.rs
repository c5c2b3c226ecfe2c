use crate::models::activity::ActivityModel;
use crate::repository::{Create, Delete, FindById, ListAll, Ping, Update};

/// The full persistence contract for activities.
///
/// Implemented automatically for any store providing every operation, so
/// the in-memory and durable stores are interchangeable behind
/// `Arc<dyn ActivityRepository>`.
pub trait ActivityRepository:
    ListAll<ActivityModel>
    + FindById<ActivityModel>
    + Create<ActivityModel>
    + Update<ActivityModel>
    + Delete
    + Ping
{
}

impl<R> ActivityRepository for R where
    R: ListAll<ActivityModel>
        + FindById<ActivityModel>
        + Create<ActivityModel>
        + Update<ActivityModel>
        + Delete
        + Ping
{
}
