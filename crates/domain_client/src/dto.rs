//! Client transfer record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::validation::{date_in_past, not_blank};
use core_kernel::ClientId;

/// Flat, external representation of a client
///
/// `id` is ignored on create and update; it is only meaningful in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    #[serde(default)]
    pub id: Option<ClientId>,

    #[validate(
        custom(function = "not_blank", message = "Name is mandatory"),
        length(min = 2, max = 50, message = "Name must be between 2 and 50 characters")
    )]
    pub name: String,

    #[validate(custom(function = "date_in_past", message = "Date of Birth must be in the past"))]
    pub date_of_birth: NaiveDate,

    #[validate(custom(function = "not_blank", message = "Address is mandatory"))]
    pub address: String,

    #[validate(
        custom(function = "not_blank", message = "Contact Information is mandatory"),
        length(
            min = 10,
            max = 15,
            message = "Contact Information must be between 10 and 15 characters"
        )
    )]
    pub contact_information: String,
}
