use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::ValidationErrors;

use crate::validation::check_activity_fields;

/// # Documentation
/// External representation of an activity, as exchanged with callers.
///
/// Every field of the stored entity has exactly one counterpart here; `id` and
/// both timestamps are system-assigned and only ever flow outwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub business_owner: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

/// Request body for creating an activity.
///
/// Required fields are optional at the type level so that a missing field is
/// reported as a validation failure naming that field, together with any other
/// violation, instead of a bare deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub business_owner: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
}

/// Request body for replacing the client-writable fields of an activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivityDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub business_owner: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
}

/// The client-writable fields of an activity once they passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityFields {
    pub name: String,
    pub description: Option<String>,
    pub business_owner: String,
    pub price: Decimal,
}

impl CreateActivityDto {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        business_owner: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            name: Some(name.into()),
            description,
            business_owner: Some(business_owner.into()),
            price: Some(price),
        }
    }

    /// Consumes the request and returns its fields, or every violated rule.
    pub fn into_fields(self) -> Result<ActivityFields, ValidationErrors> {
        check_activity_fields(self.name, self.description, self.business_owner, self.price)
    }
}

impl UpdateActivityDto {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        business_owner: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            name: Some(name.into()),
            description,
            business_owner: Some(business_owner.into()),
            price: Some(price),
        }
    }

    /// Consumes the request and returns its fields, or every violated rule.
    pub fn into_fields(self) -> Result<ActivityFields, ValidationErrors> {
        check_activity_fields(self.name, self.description, self.business_owner, self.price)
    }
}
