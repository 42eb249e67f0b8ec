//! Client domain record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::ClientId;

/// A persisted client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Store-assigned identity
    pub id: ClientId,
    /// Full name
    pub name: String,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Postal address
    pub address: String,
    /// Phone number or other contact detail
    pub contact_information: String,
}

/// A client that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub contact_information: String,
}

impl NewClient {
    /// Attaches the identity assigned by the store
    pub fn with_id(self, id: ClientId) -> Client {
        Client {
            id,
            name: self.name,
            date_of_birth: self.date_of_birth,
            address: self.address,
            contact_information: self.contact_information,
        }
    }
}
