#[cfg(test)]
pub mod test_utils {
    use crate::models::activity::ActivityModel;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    pub fn create_test_activity(name: &str) -> ActivityModel {
        let now = Utc::now();
        ActivityModel {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: Some(format!("{name} description")),
            business_owner: format!("{name} owner"),
            price: Decimal::new(4999, 2),
            created_date: now,
            updated_date: now,
        }
    }
}
