//! Field validators for transfer records
//!
//! These are the `custom` hooks used by `#[derive(Validate)]` on the transfer
//! records. Validation is run by the HTTP layer before a record reaches an
//! operations component; the core itself only checks relational existence.

use std::borrow::Cow;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use validator::ValidationError;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Rejects strings that are empty or whitespace only
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "must not be blank"));
    }
    Ok(())
}

/// Requires a date strictly before today (UTC)
pub fn date_in_past(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date >= Utc::now().date_naive() {
        return Err(error("past", "must be in the past"));
    }
    Ok(())
}

/// Requires a date no later than today (UTC)
pub fn date_not_in_future(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date > Utc::now().date_naive() {
        return Err(error("past_or_present", "must be in the past or present"));
    }
    Ok(())
}

/// Requires `value >= minimum`
pub fn decimal_at_least(
    value: &Decimal,
    minimum: Decimal,
    message: &'static str,
) -> Result<(), ValidationError> {
    if *value < minimum {
        let mut error = error("decimal_min", message);
        error.add_param(Cow::Borrowed("min"), &minimum.to_string());
        return Err(error);
    }
    Ok(())
}
