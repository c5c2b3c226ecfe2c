use chrono::{DateTime, Utc};
use day_planner_db::models::activity::ActivityModel;
use day_planner_db::models::identifiable::Identifiable;
use day_planner_db::repository::error::{RepositoryError, RepositoryResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// # Documentation
/// Stored shape of an activity: one JSON document per record, mirroring the
/// entity field for field. The id is kept in its canonical hyphenated text
/// form, the same value as the row key it is filtered on, and the price as
/// decimal text so no precision is lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDocument {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub business_owner: String,
    pub price: Decimal,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl From<&ActivityModel> for ActivityDocument {
    fn from(model: &ActivityModel) -> Self {
        ActivityDocument {
            id: model.id_text(),
            name: model.name.clone(),
            description: model.description.clone(),
            business_owner: model.business_owner.clone(),
            price: model.price,
            created_date: model.created_date,
            updated_date: model.updated_date,
        }
    }
}

impl ActivityDocument {
    pub fn into_model(self) -> RepositoryResult<ActivityModel> {
        let id = Uuid::parse_str(&self.id).map_err(|e| RepositoryError::Corrupt {
            id: self.id.clone(),
            reason: format!("invalid id: {e}"),
        })?;
        Ok(ActivityModel {
            id,
            name: self.name,
            description: self.description,
            business_owner: self.business_owner,
            price: self.price,
            created_date: self.created_date,
            updated_date: self.updated_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::activity_repository::test_utils::test_utils::create_test_activity;
    use serde_json::json;

    #[test]
    fn test_document_round_trip_is_lossless() {
        let model = create_test_activity("Gallery");

        let document = ActivityDocument::from(&model);
        assert_eq!(document.id, model.id.hyphenated().to_string());

        assert_eq!(document.into_model().unwrap(), model);
    }

    #[test]
    fn test_document_keeps_price_precision() {
        let mut model = create_test_activity("Gallery");
        model.price = Decimal::new(12345678901234, 10);

        let value = serde_json::to_value(ActivityDocument::from(&model)).unwrap();

        assert_eq!(value["price"], json!("1234.5678901234"));
        assert_eq!(value["businessOwner"], json!(model.business_owner));
    }

    #[test]
    fn test_timestamps_keep_nanoseconds_through_json() {
        let mut model = create_test_activity("Gallery");
        model.updated_date = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();

        let value = serde_json::to_value(ActivityDocument::from(&model)).unwrap();
        let document: ActivityDocument = serde_json::from_value(value).unwrap();

        assert_eq!(document.into_model().unwrap(), model);
    }

    #[test]
    fn test_invalid_id_is_corrupt() {
        let mut document = ActivityDocument::from(&create_test_activity("Gallery"));
        document.id = "not-a-uuid".to_string();

        let result = document.into_model();

        assert!(matches!(result, Err(RepositoryError::Corrupt { id, .. }) if id == "not-a-uuid"));
    }
}
