//! Claim transfer record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::validation::{date_not_in_future, not_blank};
use core_kernel::{ClaimId, PolicyId};

/// Flat, external representation of a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDto {
    #[serde(default)]
    pub id: Option<ClaimId>,

    #[validate(custom(function = "not_blank", message = "Claim Number is mandatory"))]
    pub claim_number: String,

    #[validate(custom(function = "not_blank", message = "Description is mandatory"))]
    pub description: String,

    #[validate(custom(
        function = "date_not_in_future",
        message = "Claim Date must be in the past or present"
    ))]
    pub claim_date: NaiveDate,

    #[serde(default)]
    pub status: Option<String>,

    pub policy_id: PolicyId,
}
