//! Policy transfer record

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use core_kernel::validation::{date_not_in_future, decimal_at_least, not_blank};
use core_kernel::{ClientId, PolicyId};

/// Smallest coverage amount accepted by the API
pub const MIN_COVERAGE_AMOUNT: Decimal = Decimal::from_parts(100_000, 0, 0, false, 2);

/// Smallest premium accepted by the API
pub const MIN_PREMIUM: Decimal = Decimal::from_parts(10_000, 0, 0, false, 2);

/// Flat, external representation of a policy
///
/// `client_id` is resolved against the client store on create. On update it
/// is accepted but not applied: a policy never changes owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDto {
    #[serde(default)]
    pub id: Option<PolicyId>,

    #[validate(
        custom(function = "not_blank", message = "Policy Number is mandatory"),
        length(min = 5, max = 20, message = "Policy Number must be between 5 and 20 characters")
    )]
    pub policy_number: String,

    #[serde(rename = "type")]
    #[validate(custom(function = "not_blank", message = "Policy Type is mandatory"))]
    pub policy_type: String,

    #[validate(custom(function = "coverage_at_least_minimum"))]
    pub coverage_amount: Decimal,

    #[validate(custom(function = "premium_at_least_minimum"))]
    pub premium: Decimal,

    #[validate(custom(
        function = "date_not_in_future",
        message = "Start Date must be in the past or present"
    ))]
    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    pub client_id: ClientId,
}

fn coverage_at_least_minimum(value: &Decimal) -> Result<(), ValidationError> {
    decimal_at_least(value, MIN_COVERAGE_AMOUNT, "Coverage Amount must be at least 1000.00")
}

fn premium_at_least_minimum(value: &Decimal) -> Result<(), ValidationError> {
    decimal_at_least(value, MIN_PREMIUM, "Premium must be at least 100.00")
}
