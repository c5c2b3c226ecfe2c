use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

use crate::domain::ActivityFields;
use crate::error::{ApiError, FieldViolation};

pub const MIN_PRICE: Decimal = Decimal::ONE;
pub const MAX_PRICE: Decimal = Decimal::ONE_THOUSAND;

pub const NAME_FIELD: &str = "name";
pub const BUSINESS_OWNER_FIELD: &str = "businessOwner";
pub const PRICE_FIELD: &str = "price";

/// Flattens `errors` into one violation per field and message, ordered by
/// field name.
pub fn field_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                FieldViolation::new(field.clone(), message)
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

pub fn into_api_error(errors: ValidationErrors) -> ApiError {
    ApiError::ValidationFailed(field_violations(&errors))
}

/// Checks every client-writable field and returns them once all rules hold.
///
/// All fields are inspected before returning so the error lists every
/// violation, not just the first.
pub(crate) fn check_activity_fields(
    name: Option<String>,
    description: Option<String>,
    business_owner: Option<String>,
    price: Option<Decimal>,
) -> Result<ActivityFields, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = required_text(&mut errors, NAME_FIELD, name);
    let business_owner = required_text(&mut errors, BUSINESS_OWNER_FIELD, business_owner);
    let price = price_in_range(&mut errors, price);

    match (name, business_owner, price) {
        (Some(name), Some(business_owner), Some(price)) => Ok(ActivityFields {
            name,
            description,
            business_owner,
            price,
        }),
        _ => Err(errors),
    }
}

fn required_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<String>,
) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text),
        Some(_) => {
            errors.add(field, violation("blank", "must not be blank"));
            None
        }
        None => {
            errors.add(field, violation("required", "is required"));
            None
        }
    }
}

fn price_in_range(errors: &mut ValidationErrors, value: Option<Decimal>) -> Option<Decimal> {
    match value {
        Some(price) if (MIN_PRICE..=MAX_PRICE).contains(&price) => Some(price),
        Some(_) => {
            errors.add(
                PRICE_FIELD,
                violation("range", format!("must be between {MIN_PRICE} and {MAX_PRICE}")),
            );
            None
        }
        None => {
            errors.add(PRICE_FIELD, violation("required", "is required"));
            None
        }
    }
}

fn violation(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}
