use chrono::{DateTime, Duration, Utc};
use day_planner_api::domain::{ActivityDto, ActivityFields};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// # Documentation
/// Activity is the sole entity of the day planner: something a business
/// owner offers, with a price, that callers can list, read, create, replace
/// and delete.
///
/// The price range is a rule of the input boundary; the repository stores
/// whatever price it is handed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityModel {
    /// System-assigned, immutable once created
    pub id: Uuid,

    pub name: String,

    pub description: Option<String>,

    /// Party that owns the activity
    pub business_owner: String,

    pub price: Decimal,

    /// Set once at creation
    pub created_date: DateTime<Utc>,

    /// Set at creation and refreshed on every update; never earlier than
    /// `created_date`
    pub updated_date: DateTime<Utc>,
}

impl Identifiable for ActivityModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl ActivityModel {
    /// Builds a new record with a fresh id and both timestamps set to `now`.
    pub fn new(fields: ActivityFields, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            description: fields.description,
            business_owner: fields.business_owner,
            price: fields.price,
            created_date: now,
            updated_date: now,
        }
    }

    /// Replaces every client-writable field and refreshes `updated_date`.
    ///
    /// `id` and `created_date` are left untouched. The new `updated_date` is
    /// strictly later than the previous one even if the clock has not moved.
    pub fn replace_fields(&mut self, fields: ActivityFields, now: DateTime<Utc>) {
        self.name = fields.name;
        self.description = fields.description;
        self.business_owner = fields.business_owner;
        self.price = fields.price;
        self.updated_date = if now > self.updated_date {
            now
        } else {
            self.updated_date + Duration::microseconds(1)
        };
    }
}

impl From<ActivityModel> for ActivityDto {
    fn from(model: ActivityModel) -> Self {
        ActivityDto {
            id: model.id,
            name: model.name,
            description: model.description,
            business_owner: model.business_owner,
            price: model.price,
            created_date: model.created_date,
            updated_date: model.updated_date,
        }
    }
}

impl From<ActivityDto> for ActivityModel {
    fn from(dto: ActivityDto) -> Self {
        ActivityModel {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            business_owner: dto.business_owner,
            price: dto.price,
            created_date: dto.created_date,
            updated_date: dto.updated_date,
        }
    }
}
